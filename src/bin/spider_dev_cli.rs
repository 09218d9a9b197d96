// src/bin/spider_dev_cli.rs

use std::env;

use spider_engine::domain::{ColumnId, COLUMN_COUNT};
use spider_engine::engine::{Game, GameEventKind};
use spider_engine::infra::DeterministicRng;

const DEFAULT_SEED: u64 = 42;
const DEFAULT_STEPS: usize = 500;

fn main() {
    let mut seed = DEFAULT_SEED;
    let mut steps = DEFAULT_STEPS;

    for arg in env::args().skip(1) {
        if let Some(v) = arg.strip_prefix("--seed=") {
            match v.parse() {
                Ok(s) => seed = s,
                Err(_) => println!("[CLI] Некорректный seed `{v}`, используем {seed}"),
            }
        } else if let Some(v) = arg.strip_prefix("--steps=") {
            match v.parse() {
                Ok(n) => steps = n,
                Err(_) => println!("[CLI] Некорректный --steps `{v}`, используем {steps}"),
            }
        } else {
            println!("[CLI] Неизвестный аргумент `{arg}` пропущен");
        }
    }

    println!("=== SPIDER DEV CLI (seed={seed}, steps={steps}) ===\n");

    let mut game = Game::new(&mut DeterministicRng::from_seed(seed));
    print_board(&game);

    let mut printed = 0u32;
    for step in 0..steps {
        if game.is_game_won() {
            break;
        }

        if let Some((from, index, to)) = find_productive_move(&game) {
            let moved = game.move_sequence(from, index, to);
            if !moved {
                println!("[CLI] BUG: ход {from}[{index}] -> {to} не выполнен.");
                break;
            }
        } else if !game.deal_additional_row() {
            println!("\n[CLI] Шаг {step}: ходов нет, раздать ряд нельзя — останавливаемся.");
            break;
        }

        printed = print_new_events(&game, printed);
    }

    println!();
    print_board(&game);
    println!(
        "Итого: ходов={} | раздач={}/{} | собрано мастей={}/8 | выиграно={}",
        game.moves(),
        game.deal_count(),
        game.max_draws(),
        game.completed_foundations(),
        game.is_game_won()
    );

    // Демонстрация undo: откатываем последние три действия.
    println!("\n--- undo x3 ---");
    for _ in 0..3 {
        if !game.undo_last_move() {
            println!("История пуста.");
            break;
        }
    }
    print_new_events(&game, printed);
    print_board(&game);
}

/// Первый ход, который что-то даёт: открывает карту, освобождает колонку
/// или снимает последовательность с «чужого» родителя.
fn find_productive_move(game: &Game) -> Option<(ColumnId, usize, ColumnId)> {
    for from in 0..COLUMN_COUNT {
        let source = &game.columns()[from];
        // Самая длинная подвижная последовательность.
        let Some(index) =
            (0..source.len()).find(|&i| !game.get_movable_sequence(from, i).is_empty())
        else {
            continue;
        };

        let parent_fits = index > 0
            && source.cards[index - 1].face_up
            && source.cards[index - 1].rank.pred() == Some(source.cards[index].rank);
        if parent_fits {
            continue;
        }

        for to in 0..COLUMN_COUNT {
            // Пустые колонки бот не занимает: иначе он гоняет карты по кругу.
            if !game.columns()[to].is_empty() && game.can_move_card(from, index, to) {
                return Some((from, index, to));
            }
        }
    }
    None
}

fn print_board(game: &Game) {
    for (i, column) in game.columns().iter().enumerate() {
        let cards: Vec<String> = column.cards.iter().map(|c| c.to_string()).collect();
        if cards.is_empty() {
            println!("  c{i}: [ ]");
        } else {
            println!("  c{i}: {}", cards.join(" "));
        }
    }
    println!("  колода: {} карт\n", game.deck().len());
}

fn print_new_events(game: &Game, from: u32) -> u32 {
    let events = game.log().since(from);
    for event in events {
        match &event.kind {
            GameEventKind::SequenceMoved {
                from,
                to,
                count,
                revealed_source,
            } => println!(
                "  #{:>4} move {count} card(s) c{from} -> c{to}{}",
                event.index,
                if *revealed_source { " (reveal)" } else { "" }
            ),
            GameEventKind::RowDealt { round, .. } => {
                println!("  #{:>4} deal row {round}", event.index)
            }
            GameEventKind::SuitCompleted {
                column,
                foundation,
                suit,
            } => println!(
                "  #{:>4} suit {suit} completed from c{column} -> foundation {foundation}",
                event.index
            ),
            other => println!("  #{:>4} {:?}", event.index, other),
        }
    }
    game.log().events.len() as u32
}
