pub const DEFAULT_PER_PAGE: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

pub fn total_pages(total: usize, per_page: usize) -> usize {
    let per_page = per_page.max(1);
    total.div_ceil(per_page).max(1)
}

/// Slices one page out of `items`, clamping `page` into `1..=total_pages`.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total = items.len();
    let total_pages = total_pages(total, per_page);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total);
    Page {
        items: items[start..end].to_vec(),
        page,
        total_pages,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate_slices_requested_page() {
        let items: Vec<u32> = (1..=23).collect();
        let page = paginate(&items, 3, 10);
        assert_eq!(page.items, vec![21, 22, 23]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total, 23);
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn paginate_clamps_out_of_range_pages() {
        let items: Vec<u32> = (1..=5).collect();
        assert_eq!(paginate(&items, 0, 2).page, 1);
        let last = paginate(&items, 99, 2);
        assert_eq!(last.page, 3);
        assert_eq!(last.items, vec![5]);
    }

    #[test]
    fn empty_input_yields_single_empty_page() {
        let page = paginate::<u32>(&[], 4, 10);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn zero_per_page_is_treated_as_one() {
        assert_eq!(total_pages(3, 0), 3);
        assert_eq!(paginate(&[1, 2, 3], 2, 0).items, vec![2]);
    }
}
