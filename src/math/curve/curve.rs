/// A real function of one real variable that can be sampled pointwise.
pub trait Curve {
    fn value(&self, x: f64) -> f64;

    /// First derivative at `x`.
    fn derivative(&self, x: f64) -> f64;
}

pub trait CurveIntegration: Curve {
    /// Definite integral from `a` to `b`; swapping the bounds flips the sign.
    fn integral(&self, a: f64, b: f64) -> f64;
}
