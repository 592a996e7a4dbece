//! Random Source
//!
//! モック指標生成用の乱数ソース

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// 乱数ソーストレイト
pub trait RandomSource: Send + Sync {
    /// 閉区間 [low, high] の整数を生成
    fn int_in(&self, low: i64, high: i64) -> i64;

    /// 閉区間 [low, high] の浮動小数点数を生成
    fn float_in(&self, low: f64, high: f64) -> f64;
}

/// スレッドローカル乱数（本番用）
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn int_in(&self, low: i64, high: i64) -> i64 {
        if low >= high {
            return low;
        }
        rand::thread_rng().gen_range(low..=high)
    }

    fn float_in(&self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        rand::thread_rng().gen_range(low..=high)
    }
}

/// シード固定乱数（再現性のあるモックデータ用）
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// シードから作成
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut guard = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

impl RandomSource for SeededRandom {
    fn int_in(&self, low: i64, high: i64) -> i64 {
        if low >= high {
            return low;
        }
        self.with_rng(|rng| rng.gen_range(low..=high))
    }

    fn float_in(&self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        self.with_rng(|rng| rng.gen_range(low..=high))
    }
}

/// 列挙値から一つを選択
pub fn choose<'a, T>(random: &dyn RandomSource, items: &'a [T]) -> &'a T {
    let last = items.len().saturating_sub(1) as i64;
    let index = random.int_in(0, last).clamp(0, last) as usize;
    &items[index]
}

/// 小数点以下2桁に丸める
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_stays_in_range() {
        let random = ThreadRandom;
        for _ in 0..200 {
            let n = random.int_in(70, 95);
            assert!((70..=95).contains(&n));

            let f = random.float_in(0.5, 15.0);
            assert!((0.5..=15.0).contains(&f));
        }
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);

        let left: Vec<i64> = (0..16).map(|_| a.int_in(0, 1_000_000)).collect();
        let right: Vec<i64> = (0..16).map(|_| b.int_in(0, 1_000_000)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_degenerate_range_returns_low() {
        let random = ThreadRandom;
        assert_eq!(random.int_in(5, 5), 5);
        assert_eq!(random.int_in(9, 3), 9);
        assert_eq!(random.float_in(1.5, 1.5), 1.5);
    }

    #[test]
    fn test_choose_and_round() {
        let random = SeededRandom::new(7);
        let items = ["low", "medium", "high"];
        for _ in 0..20 {
            assert!(items.contains(choose(&random, &items)));
        }

        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(1.006), 1.01);
    }
}
