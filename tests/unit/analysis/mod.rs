mod foreground;
