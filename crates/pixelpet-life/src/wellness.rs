//! Care-quality predicate and the evolution decision

use crate::config::{CareStandard, EvolutionConfig};
use crate::creature::Creature;
use crate::rng::LifeRng;
use crate::types::Evolution;

/// Whether the creature's current stats count as good care
pub fn is_well_cared_for(creature: &Creature, standard: &CareStandard) -> bool {
    creature.happiness >= standard.min_happiness
        && creature.hunger >= standard.min_hunger
        && creature.tiredness < standard.max_tiredness
        && !creature.is_sick
        && !creature.needs_cleaning
}

/// Unperturbed care score in [0, 1]
///
/// Uses the sampled history when there is one, otherwise judges the current
/// stats.
pub fn care_score(creature: &Creature, standard: &CareStandard, config: &EvolutionConfig) -> f32 {
    match creature.care_history.ratio() {
        Some(ratio) => ratio,
        None if is_well_cared_for(creature, standard) => config.fallback_good_score,
        None => config.fallback_bad_score,
    }
}

/// Classify the adult form from care quality plus a little noise
pub fn decide_evolution<R: LifeRng + ?Sized>(
    creature: &Creature,
    standard: &CareStandard,
    config: &EvolutionConfig,
    rng: &mut R,
) -> Evolution {
    let noise = rng.gen_between(-config.perturbation, config.perturbation);
    let score = care_score(creature, standard, config) + noise;
    log::debug!(
        "Evolution score {:.3} (noise {:+.3}, history {}/{})",
        score,
        noise,
        creature.care_history.good,
        creature.care_history.total()
    );

    if score > config.cutoff {
        Evolution::Good
    } else {
        Evolution::Evil
    }
}
