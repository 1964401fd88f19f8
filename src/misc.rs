/// 型に関する取り扱いを行うモジュール
mod types {

	use std::{
		fmt::Display,
		convert::AsRef
	};

	/// 文字列を受け取るためのジェネリックな型
	pub trait AnyStr: AsRef<str> + Display {}
	impl<T> AnyStr for T where T: AsRef<str> + Display {}

}
pub use types::*;



/// このモジュールからクレートの `prelude` でアクセスできるようにするアイテムをまとめたもの
pub(crate) mod for_prelude {
	pub use super::types::*;
}
