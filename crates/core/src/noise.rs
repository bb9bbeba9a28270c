/// A source of independent standard normal draws.
///
/// The engine takes its noise through this trait instead of reaching for a
/// process-wide generator, so tests can inject seeded or scripted draws
/// without touching the update rule.
///
/// Each call must return a fresh draw from N(0, 1) that is independent of
/// every other call.
///
/// Closures returning `f64` implement `GaussianSource`, which makes scripted
/// sequences easy to express:
///
/// ```
/// use zxyt_core::GaussianSource;
///
/// let mut draws = [0.5, -1.0].into_iter().cycle();
/// let mut source = move || draws.next().unwrap_or_default();
///
/// assert_eq!(source.sample(), 0.5);
/// assert_eq!(source.sample(), -1.0);
/// ```
pub trait GaussianSource {
    /// Returns the next draw.
    fn sample(&mut self) -> f64;
}

/// Blanket implementation for closures.
impl<F> GaussianSource for F
where
    F: FnMut() -> f64,
{
    fn sample(&mut self) -> f64 {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw_three<G: GaussianSource>(mut source: G) -> [f64; 3] {
        [source.sample(), source.sample(), source.sample()]
    }

    #[test]
    fn closure_yields_in_order() {
        let mut next = 0.0;
        let source = move || {
            next += 1.0;
            next
        };

        assert_eq!(draw_three(source), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn borrowed_source_keeps_its_position() {
        let mut draws = vec![3.0, 2.0, 1.0, 0.0];
        let mut source = move || draws.pop().unwrap_or(f64::NAN);

        assert_eq!(draw_three(&mut source), [0.0, 1.0, 2.0]);
        assert_eq!(source.sample(), 3.0);
    }
}
