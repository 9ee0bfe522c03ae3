//! Resolving host clip names to the idle and walk roles.

use std::fmt;

use wander_behavior::Mode;
use wander_core::ClipId;

/// Logical animation slot.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Role {
    #[default]
    Idle,
    Walk,
}

impl Role {
    /// Lower-case keyword searched for in clip names.
    pub fn keyword(self) -> &'static str {
        match self {
            Role::Idle => "idle",
            Role::Walk => "walk",
        }
    }
}

impl From<Mode> for Role {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Idle => Role::Idle,
            Mode::Walk => Role::Walk,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Which clip plays each role.
///
/// Clip handles are positions in the name list the binding was resolved
/// from; the list is kept so a later list can be compared against it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationBinding {
    idle:  ClipId,
    walk:  ClipId,
    names: Vec<String>,
}

impl AnimationBinding {
    /// Resolve roles from an ordered list of clip names.
    ///
    /// - Idle: first name containing "idle" (any case), else the first name.
    /// - Walk: first name containing "walk" (any case), else the second
    ///   name, else the first.
    ///
    /// Returns `None` for an empty list.
    pub fn resolve<S: AsRef<str>>(names: &[S]) -> Option<Self> {
        if names.is_empty() {
            return None;
        }
        let lowered: Vec<String> = names.iter().map(|n| n.as_ref().to_lowercase()).collect();
        let find = |role: Role| lowered.iter().position(|n| n.contains(role.keyword()));

        let idle = find(Role::Idle).unwrap_or(0);
        let walk = find(Role::Walk).unwrap_or(if names.len() > 1 { 1 } else { 0 });

        Some(Self {
            idle:  ClipId(idle as u32),
            walk:  ClipId(walk as u32),
            names: names.iter().map(|n| n.as_ref().to_owned()).collect(),
        })
    }

    #[inline]
    pub fn clip(&self, role: Role) -> ClipId {
        match role {
            Role::Idle => self.idle,
            Role::Walk => self.walk,
        }
    }

    /// Name of the clip bound to `role`.
    pub fn clip_name(&self, role: Role) -> &str {
        &self.names[self.clip(role).index()]
    }

    /// Every clip in the list the binding was resolved from.
    pub fn clips(&self) -> impl Iterator<Item = ClipId> + '_ {
        (0..self.names.len()).map(|i| ClipId(i as u32))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// `true` when both roles resolved to the same clip, so switching roles
    /// shows no change.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.idle == self.walk
    }

    /// `true` when `names` is exactly the list this binding came from.
    pub fn matches<S: AsRef<str>>(&self, names: &[S]) -> bool {
        self.names.len() == names.len()
            && self.names.iter().zip(names).all(|(a, b)| a == b.as_ref())
    }
}
