pub mod convert;
pub mod densecoeff;
pub mod finitefield;
pub mod monomial;
pub mod multivar;
pub mod recursive;
pub mod univariate;
pub mod zp;

pub use poly::raw::densecoeff::DenseCoeffPolynomial;
pub use poly::raw::finitefield::FiniteField;
pub use poly::raw::multivar::MultivariatePolynomial;
pub use poly::raw::recursive::RecursivePolynomial;
pub use poly::raw::univariate::UnivariatePolynomial;
