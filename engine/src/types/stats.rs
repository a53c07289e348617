//! Base battle stats and the flip permutation

/// The six base battle stats, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpAtk,
    SpDef,
    Speed,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpAtk,
        Stat::SpDef,
        Stat::Speed,
    ];

    /// Label used when displaying a stat block
    pub fn label(self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::SpAtk => "Sp. Atk",
            Stat::SpDef => "Sp. Def",
            Stat::Speed => "Speed",
        }
    }

    /// Slot this stat moves to under flip mode.
    ///
    /// HP <-> Speed, Attack <-> Sp. Def, Defense <-> Sp. Atk. Applying it
    /// twice gives back the original stat.
    pub fn flipped(self) -> Stat {
        match self {
            Stat::Hp => Stat::Speed,
            Stat::Attack => Stat::SpDef,
            Stat::Defense => Stat::SpAtk,
            Stat::SpAtk => Stat::Defense,
            Stat::SpDef => Stat::Attack,
            Stat::Speed => Stat::Hp,
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One value per base stat
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock<T> {
    pub hp: T,
    pub attack: T,
    pub defense: T,
    pub sp_atk: T,
    pub sp_def: T,
    pub speed: T,
}

impl<T: Copy> StatBlock<T> {
    /// Build a block from a function of each stat
    pub fn from_fn(mut f: impl FnMut(Stat) -> T) -> Self {
        Self {
            hp: f(Stat::Hp),
            attack: f(Stat::Attack),
            defense: f(Stat::Defense),
            sp_atk: f(Stat::SpAtk),
            sp_def: f(Stat::SpDef),
            speed: f(Stat::Speed),
        }
    }

    /// Get the value for a stat
    pub fn get(&self, stat: Stat) -> T {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpAtk => self.sp_atk,
            Stat::SpDef => self.sp_def,
            Stat::Speed => self.speed,
        }
    }

    /// Iterate `(stat, value)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Stat, T)> + '_ {
        Stat::ALL.into_iter().map(move |stat| (stat, self.get(stat)))
    }

    /// Apply `f` to every slot
    pub fn map<U: Copy>(&self, mut f: impl FnMut(T) -> U) -> StatBlock<U> {
        StatBlock::from_fn(|stat| f(self.get(stat)))
    }

    /// Move every value to its flipped slot
    pub fn flipped(&self) -> Self {
        Self::from_fn(|stat| self.get(stat.flipped()))
    }

    /// The block as it should be shown, with flip mode applied when requested
    pub fn display(&self, flip: bool) -> Self {
        if flip { self.flipped() } else { *self }
    }
}

impl<T: Copy + std::iter::Sum<T>> StatBlock<T> {
    /// Sum of all six stats
    pub fn total(&self) -> T {
        self.iter().map(|(_, value)| value).sum()
    }
}
