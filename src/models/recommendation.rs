// ABOUTME: Recommendation resolver mapping style and occasion answers to a celebrity bundle
// Rules are an ordered table; the first matching rule wins and the last one always matches

use tracing::debug;

use super::answers::{AnswerStore, Question};

/// A recommended piece of jewelry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub image: &'static str,
    pub price: &'static str,
}

/// Celebrity persona plus the products recommended alongside it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bundle {
    pub celebrity: &'static str,
    pub image: &'static str,
    pub vibe: &'static str,
    pub products: &'static [Product],
}

struct Rule {
    matches: fn(&str, &str) -> bool,
    bundle: Bundle,
}

fn traditional_wedding(style: &str, occasion: &str) -> bool {
    style.contains("Traditional") && occasion.contains("Weddings")
}

fn modern(style: &str, _occasion: &str) -> bool {
    style.contains("Modern")
}

fn bold(style: &str, _occasion: &str) -> bool {
    style.contains("Bold")
}

fn always(_style: &str, _occasion: &str) -> bool {
    true
}

/// Recommended when nothing more specific matches
const DEFAULT_BUNDLE: Bundle = Bundle {
    celebrity: "Kiara Advani",
    image: "kiara.jpg",
    vibe: "Elegant · Subtle · Graceful",
    products: &[
        Product {
            name: "Pearl Earrings",
            image: "earrings.jpg",
            price: "₹12,999",
        },
        Product {
            name: "Gold Ring",
            image: "ring.jpg",
            price: "₹22,500",
        },
    ],
};

static RULES: &[Rule] = &[
    Rule {
        matches: traditional_wedding,
        bundle: Bundle {
            celebrity: "Deepika Padukone",
            image: "deepika.jpg",
            vibe: "Royal · Traditional · Bold",
            products: &[
                Product {
                    name: "Temple Gold Jhumka",
                    image: "jhumka.jpg",
                    price: "₹27,999",
                },
                Product {
                    name: "Kundan Choker Set",
                    image: "choker.jpg",
                    price: "₹45,500",
                },
                Product {
                    name: "Gold Pearl Earrings",
                    image: "earrings.jpg",
                    price: "₹19,800",
                },
            ],
        },
    },
    Rule {
        matches: modern,
        bundle: Bundle {
            celebrity: "Alia Bhatt",
            image: "alia.jpg",
            vibe: "Chic · Modern · Minimal",
            products: &[
                Product {
                    name: "Silver Pendant",
                    image: "earrings.jpg",
                    price: "₹9,999",
                },
                Product {
                    name: "Diamond Ring",
                    image: "ring.jpg",
                    price: "₹24,500",
                },
            ],
        },
    },
    Rule {
        matches: bold,
        bundle: Bundle {
            celebrity: "Priyanka Chopra",
            image: "priyanka.jpg",
            vibe: "Glam · Statement · Vibrant",
            products: &[
                Product {
                    name: "Statement Earrings",
                    image: "earrings.jpg",
                    price: "₹18,999",
                },
                Product {
                    name: "Gold Jhumka",
                    image: "jhumka.jpg",
                    price: "₹32,500",
                },
            ],
        },
    },
    Rule {
        matches: always,
        bundle: DEFAULT_BUNDLE,
    },
];

/// Pick the bundle for a style/occasion pair. Total: the final rule matches everything.
pub fn resolve(style: &str, occasion: &str) -> &'static Bundle {
    let bundle = RULES
        .iter()
        .find(|rule| (rule.matches)(style, occasion))
        .map_or(&DEFAULT_BUNDLE, |rule| &rule.bundle);

    debug!(
        "Resolved style={:?} occasion={:?} to {}",
        style, occasion, bundle.celebrity
    );
    bundle
}

/// Resolve from collected answers. Budget is collected but not consulted.
pub fn resolve_answers(answers: &AnswerStore) -> &'static Bundle {
    resolve(
        answers.get_or_empty(Question::Style),
        answers.get_or_empty(Question::Occasion),
    )
}

/// Every bundle the resolver can return, in rule order
pub fn all_bundles() -> impl Iterator<Item = &'static Bundle> {
    RULES.iter().map(|rule| &rule.bundle)
}
