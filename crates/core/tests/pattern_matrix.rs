use cardpattern_core::{Card, Pattern, PatternCatalog};

fn cards(codes: &[&str]) -> Vec<Card> {
    codes
        .iter()
        .map(|code| code.parse().expect("card code"))
        .collect()
}

macro_rules! valid_case {
    ($name:ident, $pattern:expr, [$($code:expr),*], $expected:expr) => {
        #[test]
        fn $name() {
            assert_eq!($pattern.validate(&cards(&[$($code),*])), $expected);
        }
    };
}

macro_rules! score_case {
    ($name:ident, $pattern:expr, [$($code:expr),*], $expected:expr) => {
        #[test]
        fn $name() {
            let hand = cards(&[$($code),*]);
            assert!($pattern.validate(&hand));
            assert_eq!($pattern.calculate_score(&hand), $expected);
        }
    };
}

const RUN3: Pattern = Pattern::SuitedRun { min_len: 3 };
const RUN5: Pattern = Pattern::SuitedRun { min_len: 5 };
const STRAIGHT3: Pattern = Pattern::StraightRun { min_len: 3 };
const STRAIGHT4: Pattern = Pattern::StraightRun { min_len: 4 };
const SUIT_SET: Pattern = Pattern::SuitSet { min_len: 3 };
const COLOR_SET: Pattern = Pattern::ColorSet { min_len: 3 };

valid_case!(pair_same_rank, Pattern::Pair, ["7H", "7S"], true);
valid_case!(pair_with_joker, Pattern::Pair, ["7H", "JK"], true);
valid_case!(pair_mixed_ranks, Pattern::Pair, ["7H", "8H"], false);
valid_case!(pair_wrong_size, Pattern::Pair, ["7H", "7S", "7D"], false);
valid_case!(three_with_two_jokers, Pattern::ThreeOfKind, ["QC", "JK", "JK"], true);
valid_case!(three_mixed, Pattern::ThreeOfKind, ["QC", "QD", "KD"], false);
valid_case!(four_all_jokers, Pattern::FourOfKind, ["JK", "JK", "JK", "JK"], true);
valid_case!(four_one_joker, Pattern::FourOfKind, ["2C", "2D", "2H", "JK"], true);
valid_case!(four_off_rank, Pattern::FourOfKind, ["2C", "2D", "3H", "JK"], false);

valid_case!(run_plain, RUN3, ["5C", "6C", "7C"], true);
valid_case!(run_joker_gap, RUN3, ["5C", "JK", "7C"], true);
valid_case!(run_unsorted_input, RUN3, ["7C", "5C", "6C"], true);
valid_case!(run_joker_at_edge, RUN3, ["5C", "6C", "JK"], true);
valid_case!(run_gap_too_wide, RUN3, ["5C", "JK", "8C"], false);
valid_case!(run_two_jokers_fill_two, RUN5, ["5C", "JK", "JK", "8C", "9C"], true);
valid_case!(run_duplicate_rank, RUN3, ["5C", "5C", "6C"], false);
valid_case!(run_mixed_suits, RUN3, ["5H", "6S", "7H"], false);
valid_case!(run_too_short, RUN5, ["5C", "6C", "7C", "8C"], false);
valid_case!(run_ace_low, RUN3, ["AD", "2D", "3D"], true);
valid_case!(run_no_wraparound, RUN3, ["QD", "KD", "AD"], false);
valid_case!(straight_mixed_suits, STRAIGHT3, ["5H", "6S", "7H"], true);
valid_case!(straight_joker_gap, STRAIGHT4, ["9H", "JK", "JS", "QD"], true);
valid_case!(straight_broken, STRAIGHT3, ["5H", "7S", "9H"], false);

valid_case!(flush_five_suited, Pattern::Flush, ["2S", "5S", "9S", "JS", "KS"], true);
valid_case!(flush_with_joker, Pattern::Flush, ["2S", "5S", "9S", "JK", "KS"], true);
valid_case!(flush_off_suit, Pattern::Flush, ["2S", "5S", "9S", "JH", "KS"], false);
valid_case!(flush_four_cards, Pattern::Flush, ["2S", "5S", "9S", "KS"], false);

valid_case!(full_house_natural, Pattern::FullHouse, ["7H", "7S", "7C", "AH", "AS"], true);
valid_case!(full_house_joker_for_seven, Pattern::FullHouse, ["7H", "7S", "JK", "AH", "AS"], true);
valid_case!(full_house_two_jokers, Pattern::FullHouse, ["7H", "7S", "JK", "JK", "AS"], true);
valid_case!(full_house_all_jokers, Pattern::FullHouse, ["JK", "JK", "JK", "JK", "JK"], true);
valid_case!(full_house_three_ranks, Pattern::FullHouse, ["7H", "7S", "7C", "AH", "KS"], false);
valid_case!(full_house_four_and_one, Pattern::FullHouse, ["7H", "7S", "7C", "7D", "AS"], true);
valid_case!(full_house_four_and_joker, Pattern::FullHouse, ["7H", "7S", "7C", "7D", "JK"], true);
valid_case!(full_house_lone_card_and_jokers, Pattern::FullHouse, ["7H", "JK", "JK", "JK", "JK"], false);
valid_case!(full_house_singletons_only, Pattern::FullHouse, ["7H", "AS", "JK", "JK", "JK"], false);

valid_case!(royal_natural, Pattern::RoyalFlush, ["10H", "JH", "QH", "KH", "AH"], true);
valid_case!(royal_with_joker, Pattern::RoyalFlush, ["10H", "JH", "QH", "KH", "JK"], false);
valid_case!(royal_mixed_suit, Pattern::RoyalFlush, ["10H", "JH", "QH", "KH", "AS"], false);
valid_case!(royal_wrong_rank, Pattern::RoyalFlush, ["9H", "JH", "QH", "KH", "AH"], false);

valid_case!(suit_set_long, SUIT_SET, ["2D", "7D", "9D", "KD", "AD", "JK"], true);
valid_case!(suit_set_short, SUIT_SET, ["2D", "7D"], false);
valid_case!(color_set_reds, COLOR_SET, ["2D", "7H", "9D"], true);
valid_case!(color_set_mixed, COLOR_SET, ["2D", "7H", "9S"], false);

score_case!(score_pair_rainbow, Pattern::Pair, ["7H", "7S"], 12);
score_case!(score_pair_joker, Pattern::Pair, ["7H", "JK"], 15);
score_case!(score_three_faces_rainbow, Pattern::ThreeOfKind, ["KH", "KS", "KD"], 72);
score_case!(score_run_length_bonus, RUN3, ["5C", "6C", "7C", "8C", "9C"], 60);
score_case!(score_run5_exact, RUN5, ["5C", "6C", "7C", "8C", "9C"], 80);
score_case!(score_straight_rainbow_joker, STRAIGHT3, ["5H", "JK", "7S"], 36);
score_case!(score_royal_faces_not_all, Pattern::RoyalFlush, ["10H", "JH", "QH", "KH", "AH"], 150);
score_case!(score_full_house_joker, Pattern::FullHouse, ["7H", "7S", "JK", "AH", "AS"], 105);

#[test]
fn mixed_suit_run_is_only_a_straight() {
    let hand = cards(&["5H", "6S", "7H"]);
    let detected = PatternCatalog::standard().detect_patterns(&hand);
    assert!(detected.contains(&STRAIGHT3));
    assert!(!detected.contains(&RUN3));
}

#[test]
fn detection_follows_catalog_order() {
    let hand = cards(&["5H", "6H", "7H"]);
    let detected = PatternCatalog::standard().detect_patterns(&hand);
    assert_eq!(detected, vec![RUN3, STRAIGHT3, SUIT_SET, COLOR_SET]);
}

#[test]
fn best_pattern_prefers_score() {
    let hand = cards(&["5H", "6H", "7H"]);
    let best = PatternCatalog::standard().best_pattern(&hand).unwrap();
    assert_eq!(best.pattern, RUN3);
    assert_eq!(best.score, 40);
}

#[test]
fn nothing_detected_for_junk() {
    let hand = cards(&["2H", "9S"]);
    assert!(PatternCatalog::standard().detect_patterns(&hand).is_empty());
    assert!(PatternCatalog::standard().best_pattern(&hand).is_none());
}
