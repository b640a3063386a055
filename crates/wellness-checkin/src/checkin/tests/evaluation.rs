use super::common::*;
use crate::checkin::domain::{AnswerSet, QuestionKey, StrategyKey, Theme};
use crate::checkin::evaluation::{
    assess, choose_strategies, rank_themes, score_breakdown, score_checkin, ScoreRule,
};

#[test]
fn scorer_adds_weights_for_severe_stress_low_energy_and_difficulties() {
    let answers: AnswerSet = [
        (QuestionKey::Stress, "severe"),
        (QuestionKey::Energy, "low"),
        (QuestionKey::Thoughts, ""),
        (QuestionKey::Difficulties, "rent"),
    ]
    .into_iter()
    .collect();

    assert_eq!(score_checkin(&answers), 4);

    let rules: Vec<ScoreRule> = score_breakdown(&answers)
        .iter()
        .map(|component| component.rule)
        .collect();
    assert_eq!(
        rules,
        vec![
            ScoreRule::SevereStress,
            ScoreRule::LowEnergy,
            ScoreRule::ReportedDifficulties
        ]
    );
}

#[test]
fn scorer_is_deterministic() {
    let answers = overwhelmed_answers();
    let first = score_checkin(&answers);
    for _ in 0..10 {
        assert_eq!(score_checkin(&answers), first);
    }
    assert_eq!(first, 3);
}

#[test]
fn severe_stress_wins_over_moderate() {
    let answers = answers("", "SEVERE, maybe moderate", "", "", "");
    let components = score_breakdown(&answers);
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].rule, ScoreRule::SevereStress);
    assert_eq!(components[0].points, 2);
}

#[test]
fn crisis_language_in_thoughts_weighs_three() {
    let answers = answers("", "", "", "I keep thinking I want to Give Up", "   ");
    assert_eq!(score_checkin(&answers), 3);
    assert!(score_breakdown(&answers)
        .iter()
        .any(|component| component.rule == ScoreRule::CrisisThoughts && component.points == 3));
}

#[test]
fn missing_answers_score_zero() {
    assert_eq!(score_checkin(&AnswerSet::new()), 0);
    assert!(rank_themes(&AnswerSet::new()).is_empty());
}

#[test]
fn themes_follow_rule_order_not_input_order() {
    let answers = answers("I feel hopeless and panicky", "", "", "", "");
    assert_eq!(rank_themes(&answers), vec![Theme::Hopelessness, Theme::Panic]);
}

#[test]
fn every_extraction_rule_can_fire_in_one_pass() {
    let answers = answers(
        "lonely, Panic attacks, hopeless",
        "anxiety is high",
        "LOW",
        "I overthink and I'm self-critical",
        "",
    );
    assert_eq!(
        rank_themes(&answers),
        vec![
            Theme::Anxiety,
            Theme::LowEnergy,
            Theme::Overthinking,
            Theme::Hopelessness,
            Theme::Panic,
            Theme::Loneliness,
            Theme::SelfCriticism,
        ]
    );
}

#[test]
fn theme_rules_only_inspect_their_own_field() {
    // "anx" outside the stress answer does not count as anxiety.
    let themes = rank_themes(&overwhelmed_answers());
    assert_eq!(themes, vec![Theme::LowEnergy]);

    let answers = answers("", "", "", "", "I panic and feel lonely");
    assert!(rank_themes(&answers).is_empty());
}

#[test]
fn empty_theme_list_falls_back_to_general_support() {
    assert_eq!(
        choose_strategies(&[]),
        vec![StrategyKey::Mindfulness, StrategyKey::ReachOut]
    );
}

#[test]
fn panic_selects_every_overlapping_strategy_only() {
    let strategies = choose_strategies(&[Theme::Panic]);
    assert!(strategies.contains(&StrategyKey::Mindfulness));
    assert!(strategies.contains(&StrategyKey::Grounding));
    assert!(!strategies.contains(&StrategyKey::Journaling));
    assert!(!strategies.contains(&StrategyKey::ReachOut));
    assert!(!strategies.contains(&StrategyKey::Movement));
    assert!(!strategies.contains(&StrategyKey::SelfCompassion));
}

#[test]
fn strategies_come_back_in_lexicon_order_without_duplicates() {
    let themes = [Theme::SelfCriticism, Theme::Anxiety, Theme::LowEnergy, Theme::Panic];
    let first = choose_strategies(&themes);
    assert_eq!(
        first,
        vec![
            StrategyKey::Mindfulness,
            StrategyKey::Movement,
            StrategyKey::SelfCompassion,
            StrategyKey::Grounding,
        ]
    );
    assert_eq!(choose_strategies(&themes), first);
}

#[test]
fn assessment_bundles_score_themes_and_strategies() {
    let assessment = assess(&overwhelmed_answers());
    assert_eq!(assessment.score, 3);
    assert_eq!(
        assessment.score,
        assessment.components.iter().map(|c| c.points).sum::<u32>()
    );
    assert_eq!(assessment.themes, vec![Theme::LowEnergy]);
    assert_eq!(assessment.strategies, vec![StrategyKey::Movement]);
}
