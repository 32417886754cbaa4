// src/form/subconsultants.rs

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubConsultant {
    Electrical,
    FireSprinkler,
    TestBalance,
    Architectural,
    Structural,
}

impl SubConsultant {
    pub const ALL: [SubConsultant; 5] = [
        SubConsultant::Electrical,
        SubConsultant::FireSprinkler,
        SubConsultant::TestBalance,
        SubConsultant::Architectural,
        SubConsultant::Structural,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SubConsultant::Electrical => "Electrical",
            SubConsultant::FireSprinkler => "Fire Sprinkler",
            SubConsultant::TestBalance => "Test & Balance",
            SubConsultant::Architectural => "Architectural",
            SubConsultant::Structural => "Structural",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Sub-consultant checkboxes plus "None".
///
/// Invariant: exactly one of {`none`, any sub flag} holds at all times.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubConsultantSet {
    subs: [bool; 5],
    none: bool,
}

impl Default for SubConsultantSet {
    fn default() -> Self {
        Self {
            subs: [false; 5],
            none: true,
        }
    }
}

impl SubConsultantSet {
    pub fn is_set(&self, sub: SubConsultant) -> bool {
        self.subs[sub.slot()]
    }

    pub fn none(&self) -> bool {
        self.none
    }

    pub fn any(&self) -> bool {
        self.subs.iter().any(|b| *b)
    }

    pub fn set(&mut self, sub: SubConsultant, checked: bool) {
        self.subs[sub.slot()] = checked;
        if checked {
            self.none = false;
        } else if !self.any() {
            self.none = true;
        }
    }

    pub fn toggle(&mut self, sub: SubConsultant) {
        let checked = !self.is_set(sub);
        self.set(sub, checked);
    }

    /// Checking "None" clears every sub flag. Unchecking it with nothing else
    /// selected is refused.
    pub fn set_none(&mut self, checked: bool) {
        if checked {
            self.subs = [false; 5];
            self.none = true;
        } else if !self.any() {
            self.none = true;
        } else {
            self.none = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holds(s: &SubConsultantSet) -> bool {
        s.none() != s.any()
    }

    #[test]
    fn starts_with_none() {
        let s = SubConsultantSet::default();
        assert!(s.none());
        assert!(!s.any());
    }

    #[test]
    fn checking_a_sub_clears_none_and_last_uncheck_restores_it() {
        let mut s = SubConsultantSet::default();
        s.toggle(SubConsultant::Electrical);
        assert!(!s.none());
        s.toggle(SubConsultant::Structural);
        s.toggle(SubConsultant::Electrical);
        assert!(!s.none());
        s.toggle(SubConsultant::Structural);
        assert!(s.none());
    }

    #[test]
    fn checking_none_clears_all_subs() {
        let mut s = SubConsultantSet::default();
        s.set(SubConsultant::FireSprinkler, true);
        s.set(SubConsultant::TestBalance, true);
        s.set_none(true);
        assert!(s.none());
        assert!(SubConsultant::ALL.iter().all(|c| !s.is_set(*c)));
    }

    #[test]
    fn unchecking_none_alone_is_refused() {
        let mut s = SubConsultantSet::default();
        s.set_none(false);
        assert!(s.none());
    }

    #[test]
    fn invariant_holds_over_a_toggle_sequence() {
        let mut s = SubConsultantSet::default();
        // deterministic pseudo-random walk over all six checkboxes
        let mut x: u32 = 7;
        for _ in 0..500 {
            x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let pick = (x >> 16) % 6;
            if pick == 5 {
                let next = !s.none();
                s.set_none(next);
            } else {
                s.toggle(SubConsultant::ALL[pick as usize]);
            }
            assert!(holds(&s), "invariant broken: {s:?}");
        }
    }
}
