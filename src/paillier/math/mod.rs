// Réexporte toutes les fonctions de théorie des nombres

mod math;

pub use math::{l_function, gcd, lcm, mod_inverse};
