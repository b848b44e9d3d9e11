//! Prime factorization of `u64` values
//!
//! Miller-Rabin with a fixed witness set is exact for every `u64`, and
//! Pollard's rho splits what trial division by small primes leaves over.
//! Both run in well under a millisecond for any 64-bit input, so a divisor
//! list never costs a `√n` scan.

/// The first twelve primes; as Miller-Rabin witnesses they are exact below 3.3e24
const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Trial division stops at this bound and hands the rest to Pollard's rho
const TRIAL_BOUND: u64 = 1_000;

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Deterministic primality test for any `u64`
pub(crate) fn is_prime_u64(m: u64) -> bool {
    if m < 2 {
        return false;
    }
    for p in WITNESSES {
        if m % p == 0 {
            return m == p;
        }
    }

    let s = (m - 1).trailing_zeros();
    let d = (m - 1) >> s;

    'witness: for a in WITNESSES {
        let mut x = pow_mod(a, d, m);
        if x == 1 || x == m - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, m);
            if x == m - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// A non-trivial factor of the odd composite `m`
fn pollard_rho(m: u64) -> u64 {
    for c in 1..m {
        let step = |x: u64| ((u128::from(mul_mod(x, x, m)) + u128::from(c)) % u128::from(m)) as u64;
        let (mut x, mut y, mut d) = (2u64, 2u64, 1u64);
        while d == 1 {
            x = step(x);
            y = step(step(y));
            d = gcd(x.abs_diff(y), m);
        }
        if d != m {
            return d;
        }
    }
    m
}

fn split(m: u64, primes: &mut Vec<u64>) {
    if m == 1 {
        return;
    }
    if is_prime_u64(m) {
        primes.push(m);
        return;
    }
    let d = pollard_rho(m);
    split(d, primes);
    split(m / d, primes);
}

/// Prime factorization of `m` as ascending `(prime, exponent)` pairs
///
/// Empty for 0 and 1.
pub(crate) fn factorize(m: u64) -> Vec<(u64, u32)> {
    if m < 2 {
        return Vec::new();
    }

    let mut primes = Vec::new();
    let mut rest = m;
    let mut p = 2u64;
    while p < TRIAL_BOUND && p <= rest / p {
        while rest % p == 0 {
            primes.push(p);
            rest /= p;
        }
        p += 1;
    }
    split(rest, &mut primes);
    primes.sort_unstable();

    let mut factors: Vec<(u64, u32)> = Vec::new();
    for prime in primes {
        match factors.last_mut() {
            Some((last, exp)) if *last == prime => *exp += 1,
            _ => factors.push((prime, 1)),
        }
    }
    factors
}

/// Sum of all divisors of `m` (σ), from its factorization
pub(crate) fn divisor_sum(m: u64) -> u128 {
    if m == 0 {
        return 0;
    }
    factorize(m)
        .into_iter()
        .map(|(p, k)| {
            let p = u128::from(p);
            (p.pow(k + 1) - 1) / (p - 1)
        })
        .product()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime_u64() {
        let primes: Vec<u64> = (0..50).filter(|&m| is_prime_u64(m)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]);
        // Strong pseudoprimes to several small bases
        assert!(!is_prime_u64(3_215_031_751));
        assert!(!is_prime_u64(3_825_123_056_546_413_051));
        assert!(is_prime_u64(9_223_372_036_854_775_783));
        assert!(is_prime_u64(u64::MAX - 58));
        assert!(!is_prime_u64(u64::MAX));
    }

    #[test]
    fn test_factorize_small() {
        assert!(factorize(0).is_empty());
        assert!(factorize(1).is_empty());
        assert_eq!(factorize(12), vec![(2, 2), (3, 1)]);
        assert_eq!(factorize(97), vec![(97, 1)]);
        assert_eq!(factorize(1 << 20), vec![(2, 20)]);
    }

    #[test]
    fn test_factorize_large() {
        assert_eq!(
            factorize(i64::MAX as u64),
            vec![(7, 2), (73, 1), (127, 1), (337, 1), (92_737, 1), (649_657, 1)]
        );
        // Two primes above the trial bound
        assert_eq!(
            factorize(1_000_003 * 999_999_937),
            vec![(1_000_003, 1), (999_999_937, 1)]
        );
        // Square of a prime above the trial bound
        assert_eq!(factorize(1_000_003 * 1_000_003), vec![(1_000_003, 2)]);
    }

    #[test]
    fn test_factorization_multiplies_back() {
        for m in [2u64, 360, 65_536, 999_983, 600_851_475_143, u64::MAX] {
            let product: u128 = factorize(m)
                .into_iter()
                .map(|(p, k)| u128::from(p).pow(k))
                .product();
            assert_eq!(product, u128::from(m), "factorization of {m}");
        }
    }

    #[test]
    fn test_divisor_sum() {
        assert_eq!(divisor_sum(0), 0);
        assert_eq!(divisor_sum(1), 1);
        assert_eq!(divisor_sum(6), 12);
        assert_eq!(divisor_sum(12), 28);
        assert_eq!(divisor_sum(97), 98);
    }
}
