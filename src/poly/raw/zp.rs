//! Modular arithmetic in Zp (commonly referred as GF(p)): each element x is in the range
//! `0 <= x < p < 2^63`, where a 64-bit unsigned integer stores the value.

/// Unsigned integer storing a field element.
#[allow(non_camel_case_types)]
pub type ufield = u64;

/// Exclusive upper bound on the modulus, so that `x + y` never wraps.
pub const MAX_PRIME: ufield = 1 << 63;

/// Computes `x + y` in Zp.
#[inline]
pub fn add(x: ufield, y: ufield, p: ufield) -> ufield {
    debug_assert!(p > 0 && p < MAX_PRIME);
    debug_assert!(x < p);
    debug_assert!(y < p);
    let z = x + y;
    if z >= p {
        z - p
    } else {
        z
    }
}

/// Computes `x - y` in Zp.
#[inline]
pub fn sub(x: ufield, y: ufield, p: ufield) -> ufield {
    debug_assert!(x < p);
    debug_assert!(y < p);
    if x >= y {
        x - y
    } else {
        p - y + x
    }
}

/// Computes `x * y` in Zp.
#[inline]
pub fn mul(x: ufield, y: ufield, p: ufield) -> ufield {
    debug_assert!(x < p);
    debug_assert!(y < p);
    ((x as u128 * y as u128) % p as u128) as ufield
}

/// Computes `-x` in Zp.
#[inline]
pub fn neg(x: ufield, p: ufield) -> ufield {
    debug_assert!(x < p);
    if x == 0 {
        0
    } else {
        p - x
    }
}

/// Computes `1/x` in Zp.
pub fn inv(x: ufield, p: ufield) -> ufield {
    debug_assert!(x < p);
    // extended Euclidean algorithm on (x, p), only tracking the coefficient of x
    let (mut r0, mut r1) = (p as i128, x as i128);
    let (mut t0, mut t1) = (0i128, 1i128);
    while r1 != 0 {
        let q = r0 / r1;
        let r2 = r0 - q * r1;
        r0 = r1;
        r1 = r2;
        let t2 = t0 - q * t1;
        t0 = t1;
        t1 = t2;
    }
    assert!(r0 == 1, "{} is not invertible in Z_{}", x, p);
    if t0 < 0 {
        (t0 + p as i128) as ufield
    } else {
        t0 as ufield
    }
}

/// Computes `x^n` in Zp.
pub fn pow(x: ufield, mut n: u64, p: ufield) -> ufield {
    debug_assert!(x < p);
    if n == 0 {
        return 1 % p;
    }
    if x == 0 {
        return 0;
    }

    let mut r = 1;
    let mut b = x;
    while n > 1 {
        if n & 1 != 0 {
            r = mul(r, b, p);
        }
        b = mul(b, b, p);
        n >>= 1;
    }
    mul(r, b, p)
}

/// Deterministic primality test for 64-bit integers (Miller-Rabin with the
/// first twelve primes as witnesses).
pub fn is_prime(n: u64) -> bool {
    const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    if n < 2 {
        return false;
    }
    for &w in WITNESSES.iter() {
        if n % w == 0 {
            return n == w;
        }
    }

    let mut d = n - 1;
    let mut s = 0;
    while d & 1 == 0 {
        d >>= 1;
        s += 1;
    }

    let mulmod = |a: u64, b: u64| ((a as u128 * b as u128) % n as u128) as u64;

    'witness: for &w in WITNESSES.iter() {
        let mut x = 1u64;
        let mut b = w % n;
        let mut e = d;
        while e > 0 {
            if e & 1 != 0 {
                x = mulmod(x, b);
            }
            b = mulmod(b, b);
            e >>= 1;
        }

        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mulmod(x, x);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

#[test]
fn test_add() {
    fn check_add(x: u64, y: u64, p: u64) {
        assert_eq!(add(x, y, p) as u128, (x as u128 + y as u128) % p as u128);
    }

    check_add(100, 200, 251);
    check_add(100, 151, 251);
    check_add(100, 100, 251);
    check_add(250, 250, 251);
    check_add(4293490986, 4293490986, 4293490987);
    check_add(2305843009213693950, 2305843009213693950, 2305843009213693951);
}

#[test]
fn test_sub() {
    fn check_sub(x: u64, y: u64, p: u64) {
        assert_eq!(sub(x, y, p) as u128, (p as u128 + x as u128 - y as u128) % p as u128);
    }

    check_sub(100, 200, 251);
    check_sub(200, 100, 251);
    check_sub(0, 250, 251);
    check_sub(0, 4293490986, 4293490987);
}

#[test]
fn test_mul() {
    fn check_mul(x: u64, y: u64, p: u64) {
        assert_eq!(mul(x, y, p) as u128, x as u128 * y as u128 % p as u128);
    }

    check_mul(100, 200, 251);
    check_mul(250, 250, 251);
    check_mul(0, 250, 251);
    check_mul(250, 0, 251);
    check_mul(4293490986, 4293490985, 4293490987);
    check_mul(2305843009213693950, 2305843009213693949, 2305843009213693951);
}

#[test]
fn test_neg() {
    fn check_neg(x: u64, p: u64) {
        let z = neg(x, p);
        assert_eq!(add(x, z, p), 0);
    }

    check_neg(0, 251);
    check_neg(1, 251);
    check_neg(250, 251);
    check_neg(12345678, 4293490987);
}

#[test]
fn test_inv() {
    fn check_inv(x: u64, p: u64) {
        let z = inv(x, p);
        assert_eq!(mul(x, z, p), 1);
    }

    for x in 1..251 {
        check_inv(x, 251);
    }
    check_inv(12345678, 4293490987);
    check_inv(4293490986, 4293490987);
    check_inv(1234567890123, 2305843009213693951);
}

#[test]
#[should_panic(expected = "not invertible")]
fn test_inv_zero() {
    inv(0, 251);
}

#[test]
fn test_pow() {
    fn check_pow(x: u64, n: u32, p: u64) {
        assert_eq!(pow(x, n as u64, p) as u128, (x as u128).pow(n) % p as u128);
    }

    check_pow(0, 0, 251);
    check_pow(2, 0, 251);
    check_pow(0, 2, 251);
    for x in 2..6 {
        for n in 1..21 {
            check_pow(x, n, 233);
            check_pow(x, n, 251);
        }
    }

    // Fermat's little theorem
    assert_eq!(pow(12345678, 4293490986, 4293490987), 1);
}

#[test]
fn test_is_prime() {
    let primes: Vec<u64> = (0..100).filter(|n| is_prime(*n)).collect();
    assert_eq!(
        primes,
        vec![
            2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79,
            83, 89, 97,
        ]
    );

    assert!(is_prime(4293490987));
    assert!(is_prime(2305843009213693951));
    // Carmichael numbers and a square of a large prime
    assert!(!is_prime(561));
    assert!(!is_prime(3215031751));
    assert!(!is_prime(4293490987 * 4293490987));
}
