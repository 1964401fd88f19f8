//! ## `macro_expansion`
//! ここでは、各ソースファイルで定義されたタプル向けトレイトの実装をまとめて行うマクロを、まとめて呼び出している
//! タプルは要素の個数ごとに実装が必要であり、その最大個数をここで一元的に制御している

use crate::tuples::options::impl_zip_options;
#[cfg(feature="iterator")]
use crate::iterator::{
	product::impl_cartesian_iters,
	zip::for_iters_tuple::impl_zip_padded_iters
};

impl_zip_options!( T0 0 T1 1 T2 2 T3 3 T4 4 T5 5 T6 6 T7 7 );

#[cfg(feature="iterator")]
impl_cartesian_iters!( I0 T0 0 I1 T1 1 I2 T2 2 I3 T3 3 I4 T4 4 I5 T5 5 I6 T6 6 I7 T7 7 );

#[cfg(feature="iterator")]
impl_zip_padded_iters!( I0 T0 0 I1 T1 1 I2 T2 2 I3 T3 3 I4 T4 4 I5 T5 5 I6 T6 6 I7 T7 7 );
