use te::dice::ScriptedRng;
use te::*;
use treasure_engine as te;

/// Draws for a first town that is mild, surrounded by desert and hides `treasure_draw`.
fn mild_desert(treasure_draw: f64) -> Vec<f64> {
    vec![0.75, treasure_draw, 0.9]
}

fn session_with(difficulty: Difficulty, draws: &[f64]) -> Session<ScriptedRng> {
    Session::new("Ivan", difficulty.settings(), ScriptedRng::new(draws))
}

#[test]
fn test_buy_water_in_normal_mode() {
    let mut session = session_with(Difficulty::Normal, &mild_desert(0.9));
    let report = session.perform(Action::Buy(Item::Water));
    assert_eq!(report.outcome, Outcome::Done);
    assert_eq!(session.hunter().gold(), 18);
    assert!(session.hunter().contains_item(Item::Water));
}

#[test]
fn test_dig_success_then_already_dug() {
    let mut draws = mild_desert(0.9);
    // dig succeeds, reward floor(0.6 * 20) + 1 = 13
    draws.extend([0.8, 0.6]);
    let mut session = session_with(Difficulty::Test, &draws);
    let before = session.hunter().gold();
    let report = session.perform(Action::Dig);
    assert_eq!(report.outcome, Outcome::Done);
    let gained = session.hunter().gold() - before;
    assert!((1..=20).contains(&gained));
    assert_eq!(gained, 13);
    assert!(session.town().has_dug());

    let again = session.perform(Action::Dig);
    assert_eq!(again.outcome, Outcome::Refused);
    assert_eq!(again.message, "You already dug for gold in this town.");
    assert_eq!(session.hunter().gold(), before + gained);
}

#[test]
fn test_brawl_loss_with_three_gold() {
    let mut draws = mild_desert(0.9);
    // trouble found, stake floor(0.45 * 10) + 1 = 5, loss
    draws.extend([0.1, 0.45, 0.2]);
    let mut session = session_with(Difficulty::Normal, &draws);
    // spend 20 gold down to 3
    session.perform(Action::Buy(Item::Boots));
    session.perform(Action::Buy(Item::Machete));
    session.perform(Action::Buy(Item::Water));
    session.perform(Action::Sell(Item::Water));
    assert_eq!(session.hunter().gold(), 5);
    session.perform(Action::Buy(Item::Water));
    assert_eq!(session.hunter().gold(), 3);

    let report = session.perform(Action::Brawl);
    assert_eq!(report.outcome, Outcome::Lost);
    assert_eq!(session.hunter().gold(), -2);
    assert!(session.hunter().has_lost());
    assert!(session.is_over());
    let after = session.perform(Action::HuntTreasure);
    assert_eq!(after.message, "The hunt is over.");
    assert!(!session.town().has_hunted());
}

#[test]
fn test_duplicate_crown_across_towns() {
    // town 1: desert, crown; cross without breaking; town 2: desert, crown
    let draws = [0.75, 0.1, 0.9, 0.9, 0.75, 0.1, 0.9];
    let mut session = session_with(Difficulty::Test, &draws);
    let first = session.perform(Action::HuntTreasure);
    assert_eq!(first.message, "You found a crown!");

    let crossing = session.perform(Action::CrossTerrain);
    assert_eq!(crossing.outcome, Outcome::Done);
    assert_eq!(session.towns_visited(), 2);
    assert_eq!(session.town().treasure(), Treasure::Crown);

    let second = session.perform(Action::HuntTreasure);
    assert!(second.message.contains("You have already found this item"));
    assert_eq!(session.hunter().treasures().len(), 1);
    assert!(!session.hunter().has_won());
}

#[test]
fn test_three_distinct_treasures_win() {
    // crown, trophy, gem in three desert towns, water never breaks
    let draws = [0.75, 0.1, 0.9, 0.9, 0.75, 0.3, 0.9, 0.9, 0.75, 0.6, 0.9];
    let mut session = session_with(Difficulty::Test, &draws);
    session.perform(Action::HuntTreasure);
    session.perform(Action::CrossTerrain);
    session.perform(Action::HuntTreasure);
    session.perform(Action::CrossTerrain);
    let last = session.perform(Action::HuntTreasure);
    assert_eq!(last.outcome, Outcome::Won);
    assert!(last.ended());
    assert!(session.hunter().has_won());
    assert!(!session.hunter().has_lost());
}

#[test]
fn test_crossing_is_idempotent_without_item() {
    let mut session = session_with(Difficulty::Normal, &mild_desert(0.9));
    let first = session.perform(Action::CrossTerrain);
    let second = session.perform(Action::CrossTerrain);
    assert_eq!(first, second);
    assert_eq!(first.message, "You can't leave town, Ivan. You don't have a water.");
    assert_eq!(session.towns_visited(), 1);
}

#[test]
fn test_hard_mode_breaks_crossing_item() {
    let mut draws = mild_desert(0.9);
    draws.extend([0.1, 0.05, 0.9, 0.9]);
    let mut session = session_with(Difficulty::Hard, &draws);
    session.perform(Action::Buy(Item::Water));
    let report = session.perform(Action::CrossTerrain);
    assert!(report.message.contains("Unfortunately, you lost your water."));
    assert!(!session.hunter().contains_item(Item::Water));
    assert_eq!(session.town().terrain().kind(), TerrainKind::Marsh);
}

#[test]
fn test_easy_mode_never_breaks_items() {
    let mut draws = mild_desert(0.9);
    draws.extend([0.1, 0.05, 0.9, 0.9]);
    let mut session = session_with(Difficulty::Easy, &draws);
    session.perform(Action::Buy(Item::Water));
    let report = session.perform(Action::CrossTerrain);
    assert!(!report.message.contains("lost your"));
    assert!(session.hunter().contains_item(Item::Water));
    assert_eq!(session.hunter().gold(), 38);
}

#[test]
fn test_markdown_follows_difficulty() {
    for (difficulty, horse_back) in [(Difficulty::Easy, 12), (Difficulty::Normal, 6), (Difficulty::Hard, 3)] {
        let mut session = session_with(difficulty, &mild_desert(0.9));
        session.perform(Action::Buy(Item::Horse));
        let gold_after_buy = session.hunter().gold();
        session.perform(Action::Sell(Item::Horse));
        assert_eq!(session.hunter().gold() - gold_after_buy, horse_back, "{difficulty}");
    }
}

#[test]
fn test_samurai_perks() {
    let settings = Difficulty::Normal.settings().with_samurai(true);
    let mut draws = mild_desert(0.9);
    // tribute floor(0.35 * 10) + 1 = 4
    draws.extend([0.1, 0.35]);
    let mut session = Session::new("Ivan", settings, ScriptedRng::new(&draws));
    assert!(session.hunter().is_samurai());
    session.perform(Action::Buy(Item::Sword));
    let boat = session.perform(Action::Buy(Item::Boat));
    assert!(boat.message.starts_with("JUST TAKE IT"));
    assert_eq!(session.hunter().gold(), 20);
    let brawl = session.perform(Action::Brawl);
    assert!(brawl.message.starts_with("IS THAT A WHOLE SWORD"));
    assert_eq!(session.hunter().gold(), 24);
}

#[test]
fn test_seeded_sessions_replay_identically() {
    let play = |seed| {
        let mut session = Session::new("Ivan", Difficulty::Test.settings(), dice::seeded(seed));
        let mut log = Vec::new();
        for action in [
            Action::Dig,
            Action::Brawl,
            Action::HuntTreasure,
            Action::CrossTerrain,
            Action::Brawl,
            Action::HuntTreasure,
        ] {
            log.push(session.perform(action).message);
        }
        (log, session.hunter().gold())
    };
    assert_eq!(play(42), play(42));
}

#[test]
fn test_command_parse() {
    use te::command::*;
    assert!(matches!(parse_command("h"), Command::Hunt));
    assert!(matches!(parse_command("buy shovel"), Command::Buy(Some(ref item)) if item == "shovel"));
}

#[test]
fn test_lib_version() {
    assert!(!te::HUNTER_VERSION.is_empty());
}

#[test]
fn test_item_serde() {
    let s = serde_json::to_string(&Item::Machete).unwrap();
    assert_eq!(s, "\"machete\"");
    let back: Item = serde_json::from_str(&s).unwrap();
    assert_eq!(back, Item::Machete);
}

#[test]
fn test_style_item() {
    use te::style::GameStyle;
    let styled = "rope".item_style();
    assert!(styled.to_string().contains("rope"));
}
