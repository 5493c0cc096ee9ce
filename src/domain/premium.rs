//! Premium subscription offer shown by the upsell modal.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub popular: bool,
    pub savings: Option<&'static str>,
}

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Monthly",
        price: "€9.99",
        period: "/month",
        popular: false,
        savings: None,
    },
    Plan {
        name: "Yearly",
        price: "€79.99",
        period: "/year",
        popular: true,
        savings: Some("Save 33%"),
    },
    Plan {
        name: "Family",
        price: "€129.99",
        period: "/year",
        popular: false,
        savings: Some("Up to 6 accounts"),
    },
];

/// Index of the plan that is pre-selected when the modal opens.
pub fn default_plan_index() -> usize {
    PLANS.iter().position(|plan| plan.popular).unwrap_or(0)
}

pub const FEATURES: [(&str, &str); 5] = [
    (
        "Premium library",
        "Exclusive titles and early releases",
    ),
    (
        "Premium voices",
        "Professional narrators and advanced synthetic voices",
    ),
    (
        "Unlimited downloads",
        "Keep up to 100 titles for offline reading",
    ),
    (
        "Advanced AI",
        "Automatic summaries, concept maps and personal recommendations",
    ),
    (
        "Exclusive features",
        "Immersive mode, custom themes and advanced sync",
    ),
];
