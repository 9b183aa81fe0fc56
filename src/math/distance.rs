use num_traits::Float;

/// Euclidean distance between two three-component points
pub fn euclidean<T: Float>(a: [T; 3], b: [T; 3]) -> T {
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&p, &q)| {
            let d = p - q;
            d.mul_add(d, acc)
        })
        .sqrt()
}

/// Map a distance to a similarity where closer means larger
///
/// Zero distance scores exactly one instead of dividing by zero, so an
/// identical pair scores lower than any pair closer than one unit apart.
pub fn inverse_distance<T: Float>(distance: T) -> T {
    if distance.is_zero() {
        T::one()
    } else {
        distance.recip()
    }
}
