/// Zero-based page slice. Negative or out-of-range indices and a zero page
/// size all yield an empty slice.
#[must_use]
pub fn paginate<T>(records: &[T], page_index: i64, page_size: usize) -> &[T] {
    if page_size == 0 {
        return &[];
    }
    let Ok(index) = usize::try_from(page_index) else {
        return &[];
    };
    let Some(start) = index.checked_mul(page_size) else {
        return &[];
    };
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

/// Number of pages needed for `len` records.
#[must_use]
pub const fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_reconstruct_the_input() {
        let records: Vec<u32> = (0..23).collect();
        for page_size in [1, 2, 5, 10, 23, 50] {
            let pages = page_count(records.len(), page_size);
            let rebuilt: Vec<u32> = (0..pages)
                .flat_map(|page| {
                    paginate(&records, i64::try_from(page).unwrap(), page_size).to_vec()
                })
                .collect();
            assert_eq!(rebuilt, records, "page_size {page_size}");
        }
    }

    #[test]
    fn last_page_is_partial() {
        let records: Vec<u32> = (0..7).collect();
        assert_eq!(paginate(&records, 2, 3), &[6]);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let records: Vec<u32> = (0..7).collect();
        assert!(paginate(&records, -1, 3).is_empty());
        assert!(paginate(&records, 3, 3).is_empty());
        assert!(paginate(&records, i64::MAX, 3).is_empty());
        assert!(paginate(&records, 0, 0).is_empty());
        assert!(paginate::<u32>(&[], 0, 10).is_empty());
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 0);
    }
}
