mod logging;
pub use logging::*;

mod misc;
pub use misc::*;

pub mod tuples;

#[cfg(feature="iterator")]
pub mod iterator;

mod macro_expansion;



/// このライブラリで定義された関数や型、トレイトなどにまとめてアクセスできるモジュール
/// `use sequtils::prelude::*;` とすることで全てのリソースがインポートされる
pub mod prelude {
	pub use super::{
		tuples::for_prelude::*,
		logging::for_prelude::*,
		misc::for_prelude::*
	};
	#[cfg(feature="iterator")]
	pub use super::iterator::for_prelude::*;
}
/// このクレート内では、クレートで定義されたリソースを展開する
pub(crate) use prelude::*;
