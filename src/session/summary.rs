//! Result text - the end-of-game sentence and the move counter label.
//!
//! Grammar: `"<N> move(s) in [<M> minute(s)[ and <S> second(s)]]"` -
//! singular/plural per count, the minutes clause omitted when zero, and the
//! seconds clause omitted when minutes are shown and seconds are zero.

/// `"1 move"` / `"n moves"` for the move counter display.
#[must_use]
pub fn moves_label(moves: u32) -> String {
    count_noun(moves, "move")
}

/// The summary sentence for a finished game.
///
/// ```
/// use concentration::session::result_sentence;
///
/// assert_eq!(result_sentence(1, 0, 5), "1 move in 5 seconds");
/// assert_eq!(result_sentence(3, 1, 0), "3 moves in 1 minute");
/// ```
#[must_use]
pub fn result_sentence(moves: u32, minutes: u32, seconds: u8) -> String {
    let moves = moves_label(moves);
    if minutes > 0 {
        let mut sentence = format!("{} in {}", moves, count_noun(minutes, "minute"));
        if seconds > 0 {
            sentence.push_str(&format!(" and {}", count_noun(u32::from(seconds), "second")));
        }
        sentence
    } else {
        format!("{} in {}", moves, count_noun(u32::from(seconds), "second"))
    }
}

fn count_noun(count: u32, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_label_plurals() {
        assert_eq!(moves_label(0), "0 moves");
        assert_eq!(moves_label(1), "1 move");
        assert_eq!(moves_label(2), "2 moves");
    }

    #[test]
    fn test_seconds_only() {
        assert_eq!(result_sentence(1, 0, 5), "1 move in 5 seconds");
        assert_eq!(result_sentence(14, 0, 1), "14 moves in 1 second");
    }

    #[test]
    fn test_minutes_without_seconds() {
        assert_eq!(result_sentence(3, 1, 0), "3 moves in 1 minute");
        assert_eq!(result_sentence(30, 2, 0), "30 moves in 2 minutes");
    }

    #[test]
    fn test_minutes_and_seconds() {
        assert_eq!(result_sentence(4, 2, 30), "4 moves in 2 minutes and 30 seconds");
        assert_eq!(result_sentence(8, 1, 1), "8 moves in 1 minute and 1 second");
    }

    #[test]
    fn test_zero_time() {
        assert_eq!(result_sentence(0, 0, 0), "0 moves in 0 seconds");
    }
}
