use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1).saturating_mul(per_page);
        (page, per_page, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_values() {
        let p = Pagination {
            page: Some(0),
            per_page: Some(500),
        };
        assert_eq!(p.normalize(), (1, 100, 0));

        let p = Pagination {
            page: Some(3),
            per_page: None,
        };
        assert_eq!(p.normalize(), (3, 20, 40));

        let p = Pagination {
            page: Some(i64::MAX),
            per_page: Some(100),
        };
        assert_eq!(p.normalize(), (i64::MAX, 100, i64::MAX));
    }
}
