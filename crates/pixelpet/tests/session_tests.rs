use pixelpet::{Command, PetConfig, Script, Session};
use pixelpet_body::{BodyType, Primitive};
use pixelpet_life::{Action, LifeVariant, Stage};

fn session(variant: LifeVariant, seed: u64) -> Session {
    let mut config = PetConfig::default();
    config.simulation.variant = variant;
    config.simulation.seed = Some(seed);
    Session::new(&config).unwrap()
}

fn run_script(session: &mut Session, script: &str, until: f32) {
    let mut script = Script::parse(script).unwrap();
    while session.elapsed() < until {
        for command in script.due(session.elapsed()) {
            session.apply(command);
        }
        session.update(0.1);
    }
}

#[test]
fn test_same_seed_same_run() {
    let script = "feed@6,play@7,clean@30,medicine@40,rest@50,rest@55";
    let mut a = session(LifeVariant::Classic, 11);
    let mut b = session(LifeVariant::Classic, 11);
    run_script(&mut a, script, 90.0);
    run_script(&mut b, script, 90.0);

    assert_eq!(a.creature(), b.creature());
    assert_eq!(a.frame(), b.frame());
    assert_eq!(a.render(), b.render());
}

#[test]
fn test_actions_before_hatching_do_nothing() {
    let mut session = session(LifeVariant::Classic, 4);
    assert!(!session.apply(Command::Act(Action::Feed)));
    assert_eq!(session.creature().hunger, 2);
}

#[test]
fn test_feed_spawns_cues() {
    let mut session = session(LifeVariant::Classic, 5);
    session.update(5.0);
    assert_eq!(session.creature().stage, Stage::Hatched);
    assert!(session.apply(Command::Act(Action::Feed)));

    let events = session.drain_events();
    assert_eq!(events.len(), 3);
    assert!(session.drain_events().is_empty());
}

#[test]
fn test_unloved_evolving_pet_turns_evil() {
    // kept clean and healthy but never fed or played with
    let script: Vec<String> = (1..=110)
        .map(|secs| format!("medicine@{secs},clean@{secs}"))
        .collect();
    let mut session = session(LifeVariant::Evolving, 6);
    // incubation plus twenty 5s status ticks
    run_script(&mut session, &script.join(","), 5.0 + 20.0 * 5.0 + 1.0);

    let creature = session.creature();
    assert_eq!(creature.stage, Stage::Hatched);
    assert_eq!(creature.happiness, 0);
    assert_eq!(creature.hunger, 0);
    assert_eq!(session.body_type(), BodyType::Evil);

    let frame = session.render().unwrap();
    let cracks = frame
        .iter()
        .filter(|p| matches!(p, Primitive::Line { .. }))
        .count();
    assert_eq!(cracks, 2);
}

#[test]
fn test_restart_mid_life() {
    let mut session = session(LifeVariant::Classic, 8);
    session.update(5.0);
    session.apply(Command::Act(Action::Feed));
    assert!(session.apply(Command::Restart));
    assert_eq!(session.creature().stage, Stage::Egg);
    assert!(session.status_line().contains("egg"));
}
