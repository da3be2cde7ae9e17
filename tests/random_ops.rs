//! Randomized operation sequences checked against `VecDeque` as a model.

use std::collections::VecDeque;

use slotlist::{Direction, List};

#[test]
fn random_ops_match_vecdeque() {
    let mut rng = fastrand::Rng::with_seed(0xad1157);

    for _ in 0..32 {
        let mut list: List<u32> = List::new();
        let mut model: VecDeque<u32> = VecDeque::new();

        for _ in 0..512 {
            match rng.u32(0..7) {
                0 => {
                    let v = rng.u32(..);
                    list.push_front(v);
                    model.push_front(v);
                }
                1 => {
                    let v = rng.u32(..);
                    list.push_back(v);
                    model.push_back(v);
                }
                2 => {
                    if let Some(node) = list.front() {
                        list.remove(node);
                        model.pop_front();
                    }
                }
                3 => {
                    if let Some(node) = list.back() {
                        list.remove(node);
                        model.pop_back();
                    }
                }
                4 => {
                    list.rotate();
                    if model.len() > 1 {
                        let v = model.pop_back().unwrap();
                        model.push_front(v);
                    }
                }
                5 => {
                    // remove at a random position
                    if !model.is_empty() {
                        let i = rng.usize(0..model.len());
                        list.remove(list.seek(i as isize).unwrap());
                        model.remove(i);
                    }
                }
                6 => {
                    // insert around a random position
                    if !model.is_empty() {
                        let i = rng.usize(0..model.len());
                        let v = rng.u32(..);
                        let at = list.seek(i as isize).unwrap();
                        if rng.bool() {
                            list.insert_before(at, v);
                            model.insert(i, v);
                        } else {
                            list.insert_after(at, v);
                            model.insert(i + 1, v);
                        }
                    }
                }
                _ => unreachable!(),
            }

            assert_eq!(list.len(), model.len());
        }

        assert!(list.iter().eq(model.iter()));
        assert!(list.iter().rev().eq(model.iter().rev()));

        // spot-check positional lookup from both ends
        if !model.is_empty() {
            let i = rng.usize(0..model.len());
            assert_eq!(list.get(list.seek(i as isize).unwrap()), model.get(i));

            let back = -1 - i as isize;
            assert_eq!(
                list.get(list.seek(back).unwrap()),
                model.get(model.len() - 1 - i),
            );
        }
        assert_eq!(list.seek(model.len() as isize), None);
    }
}

#[test]
fn random_cursor_deletion_sweep() {
    let mut rng = fastrand::Rng::with_seed(0x5107);

    for _ in 0..32 {
        let mut list: List<u32> = (0..rng.u32(0..64)).collect();
        let mut model: Vec<u32> = list.iter().copied().collect();

        // delete a random subset while iterating, only ever touching the
        // node the cursor just yielded
        let keep = |v: u32| v % 3 != 0;
        model.retain(|&v| keep(v));

        let mut cursor = list.cursor(Direction::Forward);
        while let Some(node) = cursor.next(&list) {
            if !keep(*list.get(node).unwrap()) {
                list.remove(node);
            }
        }

        assert!(list.iter().eq(model.iter()));
        assert_eq!(list.len(), model.len());
    }
}
