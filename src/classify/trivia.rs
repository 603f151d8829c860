//! 每次请求随机挑一条网络冷知识
//!
//! 随机源可注入种子，测试或需要可复现输出时使用固定种子。

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const TRIVIA: &[&str] = &[
    "💡 IPv4 has about 4.3 billion addresses, and the free pool ran out in 2011.",
    "💡 The first domain name ever registered was symbolics.com in 1985.",
    "💡 8.8.8.8 is one of the most recognised IP addresses in the world.",
    "💡 127.0.0.1 always means \"this machine\" and never leaves your computer.",
    "💡 Undersea cables carry more than 95% of international internet traffic.",
    "💡 IPv6 has enough addresses to give every grain of sand on Earth trillions of them.",
    "💡 An IP address can reveal a city, but rarely an exact street.",
    "💡 The 169.254.x.x range is what your device picks when DHCP fails.",
    "💡 Multicast addresses (224.0.0.0 to 239.255.255.255) deliver one packet to many receivers.",
    "💡 The internet's routing table holds well over 900,000 IPv4 prefixes.",
];

/// 冷知识随机源
pub enum TriviaPicker {
    /// 线程本地随机数
    Thread,
    /// 固定种子，输出序列可复现
    Seeded(Mutex<StdRng>),
}

impl TriviaPicker {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::Thread,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(Mutex::new(StdRng::seed_from_u64(seed)))
    }

    /// 均匀随机选一个下标
    pub fn pick_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        match self {
            Self::Thread => rand::random_range(0..len),
            Self::Seeded(rng) => rng.lock().random_range(0..len),
        }
    }

    pub fn pick(&self) -> &'static str {
        TRIVIA[self.pick_index(TRIVIA.len())]
    }
}

impl Default for TriviaPicker {
    fn default() -> Self {
        Self::Thread
    }
}
