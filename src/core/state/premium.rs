use crate::{
    core::msg::premium::PremiumMsg,
    domain::{notice::Notice, premium},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsellOutcome {
    ModalOpened,
    AlreadyPremium,
}

/// Premium entitlement plus the upsell modal it gates.
///
/// Entitlement only ever goes from `false` to `true` within a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PremiumGate {
    is_premium: bool,
    modal_open: bool,
    selected_plan: usize,
}

impl Default for PremiumGate {
    fn default() -> Self {
        Self {
            is_premium: false,
            modal_open: false,
            selected_plan: premium::default_plan_index(),
        }
    }
}

impl PremiumGate {
    pub fn is_premium(&self) -> bool {
        self.is_premium
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn selected_plan(&self) -> usize {
        self.selected_plan
    }

    /// Returns whether the entitlement changed.
    pub fn upgrade(&mut self) -> bool {
        self.modal_open = false;
        if self.is_premium {
            return false;
        }
        self.is_premium = true;
        true
    }

    pub fn request_upsell(&mut self) -> UpsellOutcome {
        if self.is_premium {
            return UpsellOutcome::AlreadyPremium;
        }
        if !self.modal_open {
            self.modal_open = true;
            self.selected_plan = premium::default_plan_index();
        }
        UpsellOutcome::ModalOpened
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Returns the notice to surface, if any.
    pub fn update(&mut self, msg: PremiumMsg) -> Option<Notice> {
        match msg {
            PremiumMsg::RequestUpsell => match self.request_upsell() {
                UpsellOutcome::ModalOpened => None,
                UpsellOutcome::AlreadyPremium => {
                    Some(Notice::info("You already have Eduletter Premium"))
                }
            },
            PremiumMsg::NextPlan => {
                if self.modal_open {
                    self.selected_plan = (self.selected_plan + 1) % premium::PLANS.len();
                }
                None
            }
            PremiumMsg::PreviousPlan => {
                if self.modal_open {
                    self.selected_plan = self
                        .selected_plan
                        .checked_sub(1)
                        .unwrap_or(premium::PLANS.len() - 1);
                }
                None
            }
            PremiumMsg::Upgrade => {
                if self.upgrade() {
                    let plan = premium::PLANS[self.selected_plan].name;
                    log::info!("premium upgrade ({plan} plan)");
                    Some(Notice::success(format!(
                        "Welcome to Eduletter Premium ({plan})"
                    )))
                } else {
                    None
                }
            }
            PremiumMsg::CloseModal => {
                self.close_modal();
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_upgrade_is_idempotent() {
        let mut gate = PremiumGate::default();
        assert!(gate.upgrade());
        assert!(!gate.upgrade());
        assert!(gate.is_premium());
    }

    #[test]
    fn test_upgrade_twice_notifies_once() {
        let mut gate = PremiumGate::default();
        let first = gate.update(PremiumMsg::Upgrade);
        let second = gate.update(PremiumMsg::Upgrade);

        assert_eq!(
            first,
            Some(Notice::success("Welcome to Eduletter Premium (Yearly)"))
        );
        assert_eq!(second, None);
        assert!(gate.is_premium());
    }

    #[test]
    fn test_request_upsell_opens_modal_with_default_plan() {
        let mut gate = PremiumGate::default();
        assert_eq!(gate.request_upsell(), UpsellOutcome::ModalOpened);
        assert!(gate.is_modal_open());
        assert_eq!(gate.selected_plan(), 1);
    }

    #[test]
    fn test_request_upsell_when_premium() {
        let mut gate = PremiumGate::default();
        gate.upgrade();

        assert_eq!(gate.request_upsell(), UpsellOutcome::AlreadyPremium);
        assert!(!gate.is_modal_open());
        assert_eq!(
            gate.update(PremiumMsg::RequestUpsell),
            Some(Notice::info("You already have Eduletter Premium"))
        );
    }

    #[test]
    fn test_plan_selection_wraps() {
        let mut gate = PremiumGate::default();
        gate.update(PremiumMsg::RequestUpsell);
        gate.update(PremiumMsg::NextPlan);
        assert_eq!(gate.selected_plan(), 2);
        gate.update(PremiumMsg::NextPlan);
        assert_eq!(gate.selected_plan(), 0);
        gate.update(PremiumMsg::PreviousPlan);
        assert_eq!(gate.selected_plan(), 2);
    }

    #[test]
    fn test_upgrade_closes_modal() {
        let mut gate = PremiumGate::default();
        gate.update(PremiumMsg::RequestUpsell);
        gate.update(PremiumMsg::Upgrade);
        assert!(!gate.is_modal_open());
    }
}
