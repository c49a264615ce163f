use rand::{seq::SliceRandom, Rng};

const HACKER_NOUNS: &[&str] = &[
    "driver",
    "protocol",
    "bandwidth",
    "panel",
    "microchip",
    "program",
    "port",
    "card",
    "array",
    "interface",
    "system",
    "sensor",
    "firewall",
    "hard drive",
    "pixel",
    "alarm",
    "feed",
    "monitor",
    "application",
    "transmitter",
    "bus",
    "circuit",
    "capacitor",
    "matrix",
];

/// 随机生成 count 个单词，允许重复
pub fn hacker_nouns<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count)
        .filter_map(|_| HACKER_NOUNS.choose(rng))
        .map(|noun| noun.to_string())
        .collect()
}
