use std::io::{self, IsTerminal};

const RESET: &str = "\x1b[0m";

/// ANSI color codes for terminal output, empty strings when disabled
#[derive(Clone, Copy)]
pub struct Colors {
    pub error: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
    pub info: &'static str,
    enabled: bool,
}

impl Colors {
    pub fn new(enabled: bool) -> Self {
        if !enabled {
            return Self {
                error: "",
                warning: "",
                success: "",
                info: "",
                enabled,
            };
        }
        Self {
            error: "\x1b[31m",   // Red
            warning: "\x1b[33m", // Yellow
            success: "\x1b[32m", // Green
            info: "\x1b[1;36m",  // Bold cyan, used for file headers
            enabled,
        }
    }

    pub fn reset(&self) -> &'static str {
        if self.enabled {
            RESET
        } else {
            ""
        }
    }
}

/// Decide whether stdout gets colors.
///
/// Priority: --no-color > --color > NO_COLOR env > TTY detection
pub fn should_use_colors(force_color: bool, no_color: bool) -> bool {
    if no_color {
        return false;
    }
    if force_color {
        return true;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_colors_are_empty() {
        let colors = Colors::new(false);
        assert_eq!(colors.error, "");
        assert_eq!(colors.info, "");
        assert_eq!(colors.reset(), "");
    }

    #[test]
    fn test_flags_take_priority() {
        assert!(!should_use_colors(true, true));
        assert!(should_use_colors(true, false));
    }
}
