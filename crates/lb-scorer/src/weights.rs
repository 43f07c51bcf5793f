//! Hand-set coefficient table. Not learned at runtime.

use crate::types::WeightTable;

pub const STANDARD_WEIGHTS: WeightTable = WeightTable {
    intercept: 0.5,
    pclass: -1.2,
    sex: -2.5,
    age: -0.01,
    sibsp: -0.3,
    parch: -0.1,
    fare: 0.002,
    embarked_s: -0.3,
    embarked_c: 0.5,
    embarked_q: -0.2,
    family_size: -0.2,
    is_alone: 0.1,
};

impl WeightTable {
    pub const fn standard() -> Self {
        STANDARD_WEIGHTS
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::standard()
    }
}
