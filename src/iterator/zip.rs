//! 長さの合わない複数のシーケンスを欠損を補いながら zip するモジュール

use super::*;

/// イテレータのタプルに対して詰め物付きの zip を定義するモジュール
pub mod for_iters_tuple {

	/// 複数のイテレータを単一のイテレータに zip したイテレータ。いずれかのイテレータが先に尽きてもそのスロットに `None` を詰めて続行し、全てのイテレータが尽きた時点で終了する。
	pub struct ZipPadded<I> {
		/// 各スロットは進行中なら `Some(イテレータ)`、尽きたら `None`
		pub(crate) iters: I
	}

	/// 複数のイテレータのタプルを詰め物付きで zip したイテレータに変換するトレイト
	pub trait IntoZipPadded: Sized {
		type Iter;
		/// イテレータのタプル `(I1,I2,...)` をタプルのイテレータ `Iterator<Item=(Option<T1>,Option<T2>,...)>` に変換します。先に尽きたイテレータのスロットは以後 `None` になり、尽きたイテレータが再び進められることはありません。
		fn zip_padded(self) -> Self::Iter;
	}

	/// * イテレータの要素数ごとに `ZipPadded` を実装するマクロ
	/// * `impl_zip_padded_iters!( I0 T0 0 I1 T1 1 ... I(N-1) T(N-1) (N-1) )` と指定すれば、 `N` 個の要素まで対応する
	/// * `I*` `T*` の異なる型パラメータとタプルのインデクスをこの順で並べていく
	macro_rules! impl_zip_padded_iters {
		// マクロのエントリポイント: 全ての実装をモジュールで囲む
		( $( $i:ident $t:ident $n:tt )+ ) => {
			mod impl_zip_padded_iters {
				use std::iter::FusedIterator;
				use crate::iterator::zip::for_iters_tuple::*;

				impl_zip_padded_iters! {@each | $( $i $t $n )+ }
			}
		};
		// `|` より前にある要素のみの場合と、1つだけ要素を増やした場合に分ける
		(@each $( $i:ident $t:ident $n:tt )* | $in:ident $tn:ident $nn:tt $( $others:tt )* ) => {
			impl_zip_padded_iters! {@each $( $i $t $n )* | }
			impl_zip_padded_iters! {@each $( $i $t $n )* $in $tn $nn | $( $others )* }
		};
		// 全ての要素が `|` より前にある場合に実装を行う
		(@each $( $i:ident $t:ident $n:tt )+ | ) => {

			impl<$($i),+,$($t),+> IntoZipPadded for ($($i,)+)
			where $( $i: Iterator<Item=$t> ),+
			{
				type Iter = ZipPadded<($(Option<$i>,)+)>;

				fn zip_padded(self) -> Self::Iter {
					ZipPadded { iters: ( $( Some(self.$n), )+ ) }
				}
			}

			impl<$($i),+,$($t),+> Iterator for ZipPadded<($(Option<$i>,)+)>
			where $( $i: Iterator<Item=$t> ),+
			{

				type Item = ( $( Option<$t>, )+ );

				fn next(&mut self) -> Option<Self::Item> {
					// 進行中のスロットだけを進める。尽きたスロットには二度と触れない。
					let t = ( $( self.iters.$n.as_mut().and_then(|i| i.next() ), )+ );
					$( if t.$n.is_none() { self.iters.$n = None; } )+
					if $( t.$n.is_none() )&&+ { return None; }
					Some(t)
				}

				fn size_hint(&self) -> (usize, Option<usize>) {
					// 残りの組の数は最も長く残っているイテレータに一致する
					let size_hint = ( $( self.iters.$n.as_ref().map_or((0,Some(0)),|i| i.size_hint() ), )+ );
					let l = [ $( size_hint.$n.0 ),+ ].into_iter().max().unwrap_or(0);
					let u = [ $( size_hint.$n.1 ),+ ].into_iter()
					.try_fold(0_usize,|m,u| u.map(|u| m.max(u) ) );
					(l,u)
				}

			}

			impl<$($i),+,$($t),+> ExactSizeIterator for ZipPadded<($(Option<$i>,)+)>
			where $( $i: ExactSizeIterator<Item=$t> ),+ {}

			// 全てのスロットが `None` になった後は恒久的に `None` を返すため、元のイテレータによらず fused になる
			impl<$($i),+,$($t),+> FusedIterator for ZipPadded<($(Option<$i>,)+)>
			where $( $i: Iterator<Item=$t> ),+ {}

			impl<$($i),+> Clone for ZipPadded<($(Option<$i>,)+)>
			where $( $i: Iterator + Clone ),+
			{
				fn clone(&self) -> Self {
					Self {
						iters: ( $( self.iters.$n.clone(), )+ )
					}
				}
			}

		};
		// `|` の前に要素が全くない場合
		(@each | ) => {};
	}
	pub(crate) use impl_zip_padded_iters;

}
pub use for_iters_tuple::{
	ZipPadded as ZipPaddedForIteratorsTuple,
	IntoZipPadded as IntoZipPaddedIterator
};



/// 詰め物付きの zip を用いてシーケンス同士の完全一致を判定するモジュール
pub mod equality {
	use super::for_iters_tuple::ZipPadded;

	/// 2つのシーケンスが要素数も含めて完全に一致するか判定するトレイト
	pub trait PaddedEquality: Iterator + Sized {
		/// 2つのシーケンスを詰め物付きで zip し、全ての組が一致した場合にのみ `true` を返します。長さが異なる場合は `Some(..)` と `None` の組が現れるため必ず `false` になります。
		fn eq_padded<J>(self,other:J) -> bool
		where
			J: IntoIterator<Item=Self::Item>,
			Self::Item: PartialEq,
			ZipPadded<(Option<Self>,Option<J::IntoIter>)>: Iterator<Item=(Option<Self::Item>,Option<Self::Item>)>;
	}

	impl<I> PaddedEquality for I where I: Iterator {
		fn eq_padded<J>(self,other:J) -> bool
		where
			J: IntoIterator<Item=Self::Item>,
			Self::Item: PartialEq,
			ZipPadded<(Option<Self>,Option<J::IntoIter>)>: Iterator<Item=(Option<Self::Item>,Option<Self::Item>)>
		{
			ZipPadded { iters: (Some(self),Some(other.into_iter())) }
			.all(|(a,b)| a==b )
		}
	}

}
pub use equality::PaddedEquality as PaddedSequenceEquality;



#[cfg(test)]
#[test]
/// 短い側のシーケンスが `None` で補われるかテストする
fn zip_padded_pads_shorter_side() {
	let got = ( [1,2,3].into_iter(), ["x","y"].into_iter() )
	.zip_padded()
	.collect::<Vec<_>>();
	assert_eq!( got, vec![
		(Some(1),Some("x")),
		(Some(2),Some("y")),
		(Some(3),None)
	] );
}

#[cfg(test)]
#[test]
/// 両方のシーケンスが空の場合にのみ何も生成されないことをテストする
fn zip_padded_both_empty() {
	let mut it = ( 0..0, 0..0 ).zip_padded();
	assert_eq!( it.next(), None );
	assert_eq!( ( 0..0, 0..1 ).zip_padded().count(), 1 );
}

#[cfg(test)]
#[test]
/// 組の数が長い側のシーケンスに一致するかテストする
fn zip_padded_length_is_longest() {
	let got = ( 0..2, 10..15 ).zip_padded().collect::<Vec<_>>();
	assert_eq!( got.len(), 5 );
	for (i,(a,b)) in got.iter().enumerate() {
		assert_eq!( *a, (i<2).then_some(i as i32) );
		assert_eq!( *b, Some(10+i as i32) );
	}
}

#[cfg(test)]
/// 一度 `None` を返した後に再び進められるとパニックするイテレータ
struct FragileIter {
	remaining: usize,
	exhausted: bool
}
#[cfg(test)]
impl Iterator for FragileIter {
	type Item = usize;
	fn next(&mut self) -> Option<usize> {
		if self.exhausted { panic!("尽きたイテレータが再び進められました"); }
		if self.remaining==0 {
			self.exhausted = true;
			return None;
		}
		self.remaining -= 1;
		Some(self.remaining)
	}
}

#[cfg(test)]
#[test]
/// 尽きたイテレータが二度と進められないことをテストする
fn zip_padded_never_polls_retired_side() {
	let a = FragileIter { remaining: 2, exhausted: false };
	let b = FragileIter { remaining: 5, exhausted: false };
	let mut it = ( a, b ).zip_padded();
	assert_eq!( it.by_ref().count(), 5 );
	// 終端に達した後も元のイテレータに触れずに `None` を返し続ける
	assert_eq!( it.next(), None );
	assert_eq!( it.next(), None );
}

#[cfg(test)]
#[test]
/// 3つのイテレータの zip が最も長いものに合わせて続くかテストする
fn zip_padded_three_iters() {
	let got = ( 0..1, 0..3, 0..2 ).zip_padded().collect::<Vec<_>>();
	assert_eq!( got, vec![
		(Some(0),Some(0),Some(0)),
		(None,Some(1),Some(1)),
		(None,Some(2),None)
	] );
}

#[cfg(test)]
#[test]
/// サイズヒントが最も長く残っているイテレータに一致するかテストする
fn zip_padded_size_hint() {
	let mut it = ( 0..2, 0..5 ).zip_padded();
	assert_eq!( it.size_hint(), (5,Some(5)) );
	assert_eq!( it.len(), 5 );
	it.next();
	it.next();
	it.next();
	assert_eq!( it.size_hint(), (2,Some(2)) );
}

#[cfg(test)]
#[test]
/// 詰め物付きの zip による完全一致の判定をテストする
fn eq_padded_compares_whole_sequences() {
	assert!( [1,2,3].into_iter().eq_padded([1,2,3]) );
	assert!( ! [1,2,3].into_iter().eq_padded([1,2]) );
	assert!( ! [1,2].into_iter().eq_padded([1,2,3]) );
	assert!( ! [1,2,3].into_iter().eq_padded([1,2,4]) );
	assert!( (0..0).eq_padded(0..0) );
}
