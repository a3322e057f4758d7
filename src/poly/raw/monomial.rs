//! Packed exponent vectors.
//!
//! The exponents of a monomial in `nvars` variables are packed into fields of
//! `bits` bits, `64 / bits` fields per word. Variable 0 occupies the most significant
//! field of the first word, so comparing the words in order is the lexicographic order
//! with variable 0 as the primary key. Addition and subtraction of monomials are word
//! operations, which are only valid as long as no field overflows.

use std::cmp::Ordering;
use std::error::Error;
use std::fmt;

/// The smallest exponent width handed out by `bits_required`.
pub const MIN_BITS: usize = 8;
/// The widest exponent field.
pub const MAX_BITS: usize = 64;

/// An exponent does not fit in the fields of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExponentOverflow {
    pub var: usize,
    pub exponent: u64,
    pub bits: usize,
}

impl fmt::Display for ExponentOverflow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "exponent {} of variable {} does not fit in {} bits",
            self.exponent, self.var, self.bits
        )
    }
}

impl Error for ExponentOverflow {}

/// The smallest supported number of bits that can hold `max_exponent`.
pub fn bits_required(max_exponent: u64) -> usize {
    let b = MAX_BITS - max_exponent.leading_zeros() as usize;
    if b < MIN_BITS {
        MIN_BITS
    } else {
        b
    }
}

/// Description of how the exponents of `nvars` variables are packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonomialLayout {
    nvars: usize,
    bits: usize,
    fields_per_word: usize,
    words: usize,
}

impl MonomialLayout {
    pub fn new(nvars: usize, bits: usize) -> MonomialLayout {
        assert!(
            bits > 0 && bits <= MAX_BITS,
            "unsupported exponent width of {} bits",
            bits
        );
        let fields_per_word = MAX_BITS / bits;
        MonomialLayout {
            nvars,
            bits,
            fields_per_word,
            words: (nvars + fields_per_word - 1) / fields_per_word,
        }
    }

    #[inline]
    pub fn nvars(&self) -> usize {
        self.nvars
    }

    #[inline]
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Number of words of one packed exponent vector.
    #[inline]
    pub fn words(&self) -> usize {
        self.words
    }

    #[inline]
    pub fn mask(&self) -> u64 {
        if self.bits == MAX_BITS {
            !0
        } else {
            (1 << self.bits) - 1
        }
    }

    #[inline]
    pub fn fits(&self, e: u64) -> bool {
        e <= self.mask()
    }

    /// The word index and the bit shift of the field of variable `var`.
    #[inline]
    pub fn offset_shift(&self, var: usize) -> (usize, u32) {
        debug_assert!(var < self.nvars);
        let offset = var / self.fields_per_word;
        let shift = (self.fields_per_word - 1 - var % self.fields_per_word) * self.bits;
        (offset, shift as u32)
    }

    #[inline]
    pub fn get(&self, exp: &[u64], var: usize) -> u64 {
        let (offset, shift) = self.offset_shift(var);
        (exp[offset] >> shift) & self.mask()
    }

    #[inline]
    pub fn set(&self, exp: &mut [u64], var: usize, e: u64) {
        debug_assert!(self.fits(e));
        let (offset, shift) = self.offset_shift(var);
        exp[offset] = (exp[offset] & !(self.mask() << shift)) | (e << shift);
    }

    pub fn zero_monomial(&self) -> Vec<u64> {
        vec![0; self.words]
    }

    /// The packed monomial of variable `var` to the power one.
    pub fn gen(&self, var: usize) -> Vec<u64> {
        let mut exp = self.zero_monomial();
        self.set(&mut exp, var, 1);
        exp
    }

    /// Pack the exponent vector `exps` into `out`.
    pub fn pack(&self, exps: &[u64], out: &mut [u64]) -> Result<(), ExponentOverflow> {
        debug_assert_eq!(exps.len(), self.nvars);
        debug_assert_eq!(out.len(), self.words);
        for w in out.iter_mut() {
            *w = 0;
        }
        for (var, &e) in exps.iter().enumerate() {
            if !self.fits(e) {
                return Err(ExponentOverflow {
                    var,
                    exponent: e,
                    bits: self.bits,
                });
            }
            self.set(out, var, e);
        }
        Ok(())
    }

    pub fn unpack(&self, exp: &[u64], out: &mut [u64]) {
        debug_assert_eq!(out.len(), self.nvars);
        for (var, e) in out.iter_mut().enumerate() {
            *e = self.get(exp, var);
        }
    }

    pub fn unpacked(&self, exp: &[u64]) -> Vec<u64> {
        let mut out = vec![0; self.nvars];
        self.unpack(exp, &mut out);
        out
    }
}

#[inline]
pub fn cmp(a: &[u64], b: &[u64]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    a.cmp(b)
}

#[inline]
pub fn is_zero(a: &[u64]) -> bool {
    a.iter().all(|w| *w == 0)
}

/// Computes `out = a + b`.
#[inline]
pub fn add(out: &mut [u64], a: &[u64], b: &[u64]) {
    for ((o, x), y) in out.iter_mut().zip(a).zip(b) {
        *o = x.wrapping_add(*y);
    }
}

/// Computes `out = a + c * g`.
#[inline]
pub fn madd(out: &mut [u64], a: &[u64], c: u64, g: &[u64]) {
    for ((o, x), y) in out.iter_mut().zip(a).zip(g) {
        *o = x.wrapping_add(c.wrapping_mul(*y));
    }
}

/// Computes `out = a - c * g`. The fields of `c * g` must be at most the fields of `a`.
#[inline]
pub fn msub(out: &mut [u64], a: &[u64], c: u64, g: &[u64]) {
    for ((o, x), y) in out.iter_mut().zip(a).zip(g) {
        *o = x.wrapping_sub(c.wrapping_mul(*y));
    }
}

#[test]
fn test_layout() {
    let l = MonomialLayout::new(10, 16);
    assert_eq!(l.words(), 3);
    assert_eq!(l.offset_shift(0), (0, 48));
    assert_eq!(l.offset_shift(3), (0, 0));
    assert_eq!(l.offset_shift(4), (1, 48));
    assert_eq!(l.offset_shift(9), (2, 32));

    let l = MonomialLayout::new(3, 64);
    assert_eq!(l.words(), 3);
    assert_eq!(l.mask(), !0);

    let l = MonomialLayout::new(5, 20);
    assert_eq!(l.words(), 2);
    assert_eq!(l.mask(), 0xfffff);
}

#[test]
fn test_pack_unpack() {
    let l = MonomialLayout::new(5, 8);
    let exps = [3, 0, 255, 17, 1];
    let mut packed = l.zero_monomial();
    l.pack(&exps, &mut packed).unwrap();
    assert_eq!(l.unpacked(&packed), exps.to_vec());
    assert_eq!(l.get(&packed, 2), 255);

    l.set(&mut packed, 2, 4);
    assert_eq!(l.unpacked(&packed), vec![3, 0, 4, 17, 1]);

    assert_eq!(
        l.pack(&[0, 256, 0, 0, 0], &mut packed),
        Err(ExponentOverflow {
            var: 1,
            exponent: 256,
            bits: 8
        })
    );
}

#[test]
fn test_lex_order() {
    let l = MonomialLayout::new(9, 8);
    let exps = [
        vec![0, 0, 0, 0, 0, 0, 0, 0, 5],
        vec![0, 0, 0, 0, 0, 0, 0, 1, 0],
        vec![0, 0, 0, 0, 0, 0, 0, 1, 2],
        vec![0, 0, 1, 0, 0, 0, 0, 0, 0],
        vec![1, 0, 0, 0, 0, 0, 0, 0, 0],
        vec![1, 0, 0, 0, 0, 0, 0, 0, 200],
        vec![2, 0, 0, 0, 0, 0, 0, 0, 0],
    ];

    let packed: Vec<Vec<u64>> = exps
        .iter()
        .map(|e| {
            let mut p = l.zero_monomial();
            l.pack(e, &mut p).unwrap();
            p
        })
        .collect();

    for i in 0..exps.len() {
        for j in 0..exps.len() {
            assert_eq!(cmp(&packed[i], &packed[j]), exps[i].cmp(&exps[j]));
        }
    }
}

#[test]
fn test_word_arithmetic() {
    let l = MonomialLayout::new(4, 12);
    let mut a = l.zero_monomial();
    let mut b = l.zero_monomial();
    l.pack(&[1, 2, 3, 4], &mut a).unwrap();
    l.pack(&[4, 0, 2, 1], &mut b).unwrap();

    let mut c = l.zero_monomial();
    add(&mut c, &a, &b);
    assert_eq!(l.unpacked(&c), vec![5, 2, 5, 5]);

    let mut d = l.zero_monomial();
    madd(&mut d, &a, 7, &l.gen(1));
    assert_eq!(l.unpacked(&d), vec![1, 9, 3, 4]);
    msub(&mut c, &d, 9, &l.gen(1));
    assert_eq!(l.unpacked(&c), vec![1, 0, 3, 4]);
    assert!(!is_zero(&c));
    assert!(is_zero(&l.zero_monomial()));
}

#[test]
fn test_bits_required() {
    assert_eq!(bits_required(0), MIN_BITS);
    assert_eq!(bits_required(255), 8);
    assert_eq!(bits_required(256), 9);
    assert_eq!(bits_required(!0), 64);
}
