//! Formatting utilities for terminal output

/// Format a tile face as `[low|high]`
#[must_use]
pub fn face_label(face: (u8, u8)) -> String {
    format!("[{}|{}]", face.0, face.1)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Guess accuracy (matches over attempts) as a bar
#[must_use]
pub fn accuracy_bar(matches: usize, attempts: usize, width: usize) -> String {
    if attempts == 0 {
        return create_progress_bar(0.0, 1.0, width);
    }

    create_progress_bar(matches as f64, attempts as f64, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_label_formats_pips() {
        assert_eq!(face_label((2, 5)), "[2|5]");
        assert_eq!(face_label((3, 3)), "[3|3]");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn accuracy_bar_no_attempts_is_empty() {
        let bar = accuracy_bar(0, 0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn accuracy_bar_perfect_game_is_full() {
        let bar = accuracy_bar(6, 6, 10);
        assert_eq!(bar, "██████████");
    }
}
