//! Treasures hidden in towns.

use crate::dice;

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// What a town has buried. `Dust` is the "nothing here" sentinel and is never collected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Treasure {
    Crown,
    Trophy,
    Gem,
    Dust,
}

impl Treasure {
    /// The collectible treasures; owning all of them wins the hunt.
    pub const NAMED: [Treasure; 3] = [Treasure::Crown, Treasure::Trophy, Treasure::Gem];

    /// Uniform pick over all four outcomes, dust included.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Treasure {
        match dice::partition(rng, 4) {
            0 => Treasure::Crown,
            1 => Treasure::Trophy,
            2 => Treasure::Gem,
            _ => Treasure::Dust,
        }
    }

    pub fn is_named(self) -> bool {
        self != Treasure::Dust
    }
}

impl Display for Treasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Treasure::Crown => "a crown",
            Treasure::Trophy => "a trophy",
            Treasure::Gem => "a gem",
            Treasure::Dust => "dust",
        };
        write!(f, "{text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRng;

    #[test]
    fn draws_each_quarter() {
        let mut rng = ScriptedRng::new(&[0.1, 0.3, 0.6, 0.9]);
        assert_eq!(Treasure::random(&mut rng), Treasure::Crown);
        assert_eq!(Treasure::random(&mut rng), Treasure::Trophy);
        assert_eq!(Treasure::random(&mut rng), Treasure::Gem);
        assert_eq!(Treasure::random(&mut rng), Treasure::Dust);
    }

    #[test]
    fn dust_is_not_named() {
        assert!(!Treasure::Dust.is_named());
        assert!(Treasure::NAMED.iter().all(|t| t.is_named()));
    }
}
