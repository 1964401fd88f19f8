use super::*;
pub(crate) use std::iter::{
	Iterator,
	ExactSizeIterator,
	FusedIterator
};



#[cfg(feature="iterator")]
pub mod product;

#[cfg(feature="iterator")]
pub mod zip;

#[cfg(feature="iterator")]
pub mod misc;



/// このモジュールからクレートの `prelude` でアクセスできるようにするアイテムをまとめたもの
pub(crate) mod for_prelude {
	pub use super::{
		product::{
			IntoTupleProductIterator,
			IntoArrayProductIterator
		},
		zip::{
			IntoZipPaddedIterator,
			PaddedSequenceEquality
		},
		misc::{
			IteratorCycleNExtension,
			IteratorEnumerateFromExtension
		}
	};
}
