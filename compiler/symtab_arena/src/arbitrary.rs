//! Proptest strategies for [`ID`].

use proptest::{
    prelude::{Arbitrary, BoxedStrategy, Strategy},
    prop_oneof,
};

use crate::ID;

/// Indices below this bound are generated most of the time so that the IDs
/// land inside the small arenas built by tests.
pub const DENSE_INDEX_BOUND: usize = 64;

impl<T: 'static> Arbitrary for ID<T> {
    type Strategy = BoxedStrategy<Self>;
    type Parameters = ();

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        prop_oneof![
            4 => 0..DENSE_INDEX_BOUND,
            1 => proptest::num::usize::ANY,
        ]
        .prop_map(Self::new)
        .boxed()
    }
}
