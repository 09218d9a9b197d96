use crate::domain::{Card, Rank, RUN_LENGTH};

/// Подвижная последовательность, начинающаяся с `start`.
///
/// Пустой результат означает «здесь нечего переносить»: индекс вне колонки,
/// карта закрыта, или ниже неё есть разрыв по масти/рангу. Частичных
/// последовательностей не бывает.
pub fn movable_sequence(cards: &[Card], start: usize) -> &[Card] {
    let Some(run) = cards.get(start..).filter(|run| !run.is_empty()) else {
        return &[];
    };
    if !run[0].face_up {
        return &[];
    }
    if is_descending_run(run) {
        run
    } else {
        &[]
    }
}

/// Все соседние пары открыты, одной масти и убывают ровно на 1.
pub fn is_descending_run(cards: &[Card]) -> bool {
    cards
        .windows(2)
        .all(|pair| pair[0].face_up && pair[1].face_up && pair[1].follows_in_suit(&pair[0]))
}

/// Являются ли 13 верхних карт полной мастью K..A.
pub fn has_complete_run_on_top(cards: &[Card]) -> bool {
    if cards.len() < RUN_LENGTH {
        return false;
    }
    is_complete_run(&cards[cards.len() - RUN_LENGTH..])
}

/// Ровно 13 карт одной масти от короля до туза без пропусков.
pub fn is_complete_run(cards: &[Card]) -> bool {
    cards.len() == RUN_LENGTH
        && cards[0].rank == Rank::King
        && cards[RUN_LENGTH - 1].rank == Rank::Ace
        && is_descending_run(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(list: &str) -> Vec<Card> {
        list.split_whitespace()
            .map(|s| s.parse().expect("card"))
            .collect()
    }

    #[test]
    fn stops_on_suit_break() {
        let col = parse("9s~ 8s 7s 6h");
        assert!(movable_sequence(&col, 1).is_empty());
        assert_eq!(movable_sequence(&col, 3), &col[3..]);
        assert!(movable_sequence(&col, 0).is_empty());
        assert!(movable_sequence(&col, 4).is_empty());
    }

    #[test]
    fn full_run_detection() {
        let mut run = parse("Ks Qs Js Ts 9s 8s 7s 6s 5s 4s 3s 2s As");
        assert!(is_complete_run(&run));
        run[5].face_up = false;
        assert!(!is_complete_run(&run));
    }

    #[test]
    fn mixed_suit_run_is_not_complete() {
        let run = parse("Ks Qs Js Ts 9s 8s 7h 6s 5s 4s 3s 2s As");
        assert!(!has_complete_run_on_top(&run));
    }
}
