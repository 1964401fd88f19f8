use super::*;



/// イテレータ全体を有限回だけ繰り返すモジュール
mod cycle_n {

	/// イテレータ全体を有限回だけ繰り返すトレイト
	pub trait IteratorCycleNExtension: Iterator + Clone + Sized {
		/// このイテレータ全体を `repeat` 回繰り返す遅延イテレータを返します。巻き戻しには `Clone` を利用します。
		fn cycle_n(self,repeat:usize) -> CycleN<Self>;
	}

	impl<I> IteratorCycleNExtension for I where I: Iterator + Clone {
		fn cycle_n(self,repeat:usize) -> CycleN<I> {
			CycleN {
				source: self.clone(),
				iterator: self,
				remaining: repeat
			}
		}
	}

	/// イテレータ全体を有限回だけ繰り返すイテレータ
	#[derive(Clone)]
	pub struct CycleN<I> {
		source: I,
		iterator: I,
		/// 現在進行中の周回を含む残りの周回数
		remaining: usize
	}

	impl<I> Iterator for CycleN<I> where I: Iterator + Clone {

		type Item = I::Item;

		fn next(&mut self) -> Option<Self::Item> {
			if self.remaining==0 { return None; }
			match self.iterator.next() {
				s @ Some(_) => s,
				None => {
					self.remaining -= 1;
					if self.remaining==0 { return None; }
					self.iterator = self.source.clone();
					self.iterator.next()
				}
			}
		}

		fn size_hint(&self) -> (usize, Option<usize>) {
			if self.remaining==0 { return (0,Some(0)); }
			let current = self.iterator.size_hint();
			let source = self.source.size_hint();
			let rest = self.remaining - 1;
			(
				current.0.saturating_add( source.0.saturating_mul(rest) ),
				current.1.and_then(|c|
					source.1
					.and_then(|s| s.checked_mul(rest) )
					.and_then(|m| c.checked_add(m) )
				)
			)
		}

	}

}
pub use cycle_n::{ CycleN, IteratorCycleNExtension };



/// 任意の開始値からインデクスを振りながら列挙するモジュール
mod enumerate_from {
	use super::*;

	/// イテレータの各要素に開始値付きのインデクスを振るトレイト
	pub trait IteratorEnumerateFromExtension: Iterator + Sized {
		/// `first` から始まる連番を各要素に付けた `(インデクス, 要素)` のイテレータを返します
		fn enumerate_from(self,first:usize) -> EnumerateFrom<Self>;
	}

	impl<I> IteratorEnumerateFromExtension for I where I: Iterator {
		fn enumerate_from(self,first:usize) -> EnumerateFrom<I> {
			EnumerateFrom { iterator: self, index: first }
		}
	}

	/// 開始値付きのインデクスを振ったイテレータ
	#[derive(Clone)]
	pub struct EnumerateFrom<I> {
		iterator: I,
		index: usize
	}

	impl<I> Iterator for EnumerateFrom<I> where I: Iterator {

		type Item = (usize,I::Item);

		fn next(&mut self) -> Option<Self::Item> {
			let v = self.iterator.next()?;
			let i = self.index;
			self.index += 1;
			Some((i,v))
		}

		fn size_hint(&self) -> (usize, Option<usize>) {
			self.iterator.size_hint()
		}

	}

	impl<I> ExactSizeIterator for EnumerateFrom<I>
	where I: ExactSizeIterator {}

	impl<I> FusedIterator for EnumerateFrom<I>
	where I: FusedIterator {}

}
pub use enumerate_from::{ EnumerateFrom, IteratorEnumerateFromExtension };



#[cfg(test)]
#[test]
/// イテレータ全体が指定した回数だけ繰り返されるかテストする
fn cycle_n_repeats_whole_iterator() {
	let got = [1,2,3].into_iter().cycle_n(2).collect::<Vec<_>>();
	assert_eq!( got, vec![1,2,3,1,2,3] );
	assert_eq!( (0..3).cycle_n(0).count(), 0 );
	assert_eq!( (0..0).cycle_n(4).count(), 0 );
}

#[cfg(test)]
#[test]
/// 繰り返しイテレータのサイズヒントをテストする
fn cycle_n_size_hint() {
	let mut it = (0..3).cycle_n(3);
	assert_eq!( it.size_hint(), (9,Some(9)) );
	it.next();
	assert_eq!( it.size_hint(), (8,Some(8)) );
}

#[cfg(test)]
#[test]
/// 開始値付きのインデクスが振られるかテストする
fn enumerate_from_starts_at_offset() {
	let got = ["a","b","c"].into_iter().enumerate_from(5).collect::<Vec<_>>();
	assert_eq!( got, vec![ (5,"a"),(6,"b"),(7,"c") ] );
	let mut it = (0..4).enumerate_from(1);
	assert_eq!( it.len(), 4 );
	it.next();
	assert_eq!( it.next(), Some((2,1)) );
}
