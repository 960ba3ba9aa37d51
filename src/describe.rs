use rand::seq::SliceRandom;
use rand::Rng;

pub const ADJECTIVES: &[&str] = &[
    "bagre",
    "ligeiro",
    "cabuloso",
    "letal",
    "encapetado",
    "matuto veloz",
    "bicho ruim",
    "canhoto do além",
    "motorzinho da bola",
    "tenebroso",
];

/// Build a verdict line like "O Romário é letal."
pub fn describe_player(name: &str, rng: &mut impl Rng) -> String {
    let adjective = ADJECTIVES.choose(rng).unwrap();
    format!("O {} é {}.", name, adjective)
}
