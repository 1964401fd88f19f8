use super::*;

use std::process::exit;

/// Result 型や Option 型をアンラップして、失敗をログとして報告するモジュール
pub mod unwrap_report {
	use super::*;

	#[cfg(feature="logging")]
	extern crate log;

	pub trait UnwrapOrError<O> {
		/// アンラップし、失敗したらエラーメッセージを出して終了する
		fn unwrap_or_error_as(self,message:impl AnyStr) -> O;
	}
	pub trait UnwrapOrWarn<T> {
		/// アンラップし、失敗したら警告メッセージを出してエラー側の値をそのまま使う (エラー型と成功型が同一の場合のみ)
		fn unwrap_or_warn_as(self,message:impl AnyStr) -> T;
	}

	/// トレートの実装
	impl<O,E> UnwrapOrError<O> for Result<O,E> {
		fn unwrap_or_error_as(self,message:impl AnyStr) -> O {
			self.unwrap_or_else(|_| {
				#[cfg(feature="logging")]
				log::error!("{}",message);
				#[cfg(not(feature="logging"))]
				eprintln!("ERROR: {}",message);
				exit(1);
			})
		}
	}
	impl<O> UnwrapOrError<O> for Option<O> {
		fn unwrap_or_error_as(self,message:impl AnyStr) -> O {
			self.unwrap_or_else(|| {
				#[cfg(feature="logging")]
				log::error!("{}",message);
				#[cfg(not(feature="logging"))]
				eprintln!("ERROR: {}",message);
				exit(1);
			})
		}
	}
	impl<T> UnwrapOrWarn<T> for Result<T,T> {
		fn unwrap_or_warn_as(self,message:impl AnyStr) -> T {
			self.unwrap_or_else(|v| {
				#[cfg(feature="logging")]
				log::warn!("{}",message);
				#[cfg(not(feature="logging"))]
				eprintln!("WARNING: {}",message);
				v
			})
		}
	}

}



/// エラーを報告して終了するモジュール
pub mod fatal_error {
	use super::*;

	use std::backtrace::Backtrace;

	#[cfg(feature="logging")]
	extern crate log;

	/// 回復不能なエラーを報告して終了する
	pub fn fatal_error(message:impl AnyStr) -> ! {
		let b = Backtrace::force_capture();
		#[cfg(feature="logging")]
		log::error!(
			"{}\nバックトレース:\n{}",
			message, b
		);
		#[cfg(not(feature="logging"))]
		eprintln!(
			"{}\nバックトレース:\n{}",
			message, b
		);
		exit(1);
	}

}



#[cfg(test)]
#[test]
/// 成功側の値がそのまま取り出せるかテストする
fn unwrap_success_paths() {
	let r:Result<u32,&str> = Ok(42);
	assert_eq!( r.unwrap_or_error_as("値を取り出せませんでした"), 42 );
	assert_eq!( Some("a").unwrap_or_error_as("値を取り出せませんでした"), "a" );
	let w:Result<u32,u32> = Err(7);
	assert_eq!( w.unwrap_or_warn_as("エラー側の値を代用します"), 7 );
}



/// このモジュールからクレートの `prelude` でアクセスできるようにするアイテムをまとめたもの
pub(crate) mod for_prelude {
	pub use super::{
		unwrap_report::*,
		fatal_error::*
	};
}
