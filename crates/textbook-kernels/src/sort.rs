/// Sorts `data` in place into ascending order with a bubble sort.
///
/// Adjacent elements are swapped only when the later one is strictly
/// smaller, so equal elements keep their relative order.
pub fn bubble_sort<T: PartialOrd>(data: &mut [T]) {
    let count = data.len();
    for i in 0..count.saturating_sub(1) {
        for j in 0..count - i - 1 {
            if data[j + 1] < data[j] {
                data.swap(j, j + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sort_program_array() {
        let mut data = [0, 6, 8, 4, 3, 9, 7, 5];
        bubble_sort(&mut data);
        assert_eq!(data, [0, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn sort_trivial_inputs() {
        let mut empty: [i32; 0] = [];
        bubble_sort(&mut empty);

        let mut single = [42];
        bubble_sort(&mut single);
        assert_eq!(single, [42]);
    }

    #[derive(Debug, PartialEq)]
    struct Card {
        rank: u8,
        tag: char,
    }

    // Ordered by rank only.
    impl PartialOrd for Card {
        fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
            self.rank.partial_cmp(&other.rank)
        }
    }

    #[test]
    fn sort_is_stable() {
        let card = |rank, tag| Card { rank, tag };
        let mut data = [card(2, 'a'), card(1, 'b'), card(2, 'c'), card(1, 'd')];
        bubble_sort(&mut data);
        assert_eq!(data, [card(1, 'b'), card(1, 'd'), card(2, 'a'), card(2, 'c')]);
    }

    proptest! {
        #[test]
        fn sorted_permutation(input in prop::collection::vec(any::<i32>(), 0..64)) {
            let mut data = input.clone();
            bubble_sort(&mut data);

            prop_assert!(data.windows(2).all(|pair| pair[0] <= pair[1]));

            let mut expected = input;
            expected.sort();
            prop_assert_eq!(data, expected);
        }
    }
}
