//! Pagination controls.

use crate::messages::{MSG_NEXT, MSG_NEXT_RESULTS, MSG_PREVIOUS, MSG_PREVIOUS_RESULTS};
use crate::{ButtonGroupWidget, ButtonWidget, PageTitle, ResultFormatter};
use bucket_core::{PagingState, QueryParams};
use tracing::{debug, instrument};

impl ResultFormatter {
    /// Builds the previous / page-size / next button row for a paged view.
    ///
    /// Every link keeps the caller's extra query parameters; `limit` and
    /// `offset` always take the values computed for that link.
    #[instrument(
        skip(self, title, paging),
        fields(
            title = %title,
            limit = paging.limit(),
            offset = paging.offset(),
            has_next = paging.has_next()
        )
    )]
    pub fn get_page_links(&self, title: &PageTitle, paging: &PagingState) -> ButtonGroupWidget {
        let limit = *paging.limit();
        let offset = *paging.offset();
        let extra = paging.extra_query();
        let limit_text = limit.to_string();

        let mut links = Vec::with_capacity(self.config.page_sizes().len() + 2);

        links.push(ButtonWidget {
            href: self.link(title, limit, paging.previous_offset(), extra),
            title: self
                .messages
                .message(MSG_PREVIOUS_RESULTS, &[limit_text.as_str()]),
            label: format!("{} {}", self.messages.plain(MSG_PREVIOUS), limit),
            disabled: paging.is_first_page(),
            active: false,
        });

        for &size in self.config.page_sizes() {
            links.push(ButtonWidget {
                href: self.link(title, size, offset, extra),
                title: format!("Show {} results per page.", size),
                label: size.to_string(),
                disabled: false,
                active: size == limit,
            });
        }

        links.push(ButtonWidget {
            href: self.link(title, limit, paging.next_offset(), extra),
            title: self
                .messages
                .message(MSG_NEXT_RESULTS, &[limit_text.as_str()]),
            label: format!("{} {}", self.messages.plain(MSG_NEXT), limit),
            disabled: !paging.has_next(),
            active: false,
        });

        debug!(button_count = links.len(), "Built pagination controls");
        ButtonGroupWidget::new(links)
    }

    fn link(&self, title: &PageTitle, limit: u64, offset: u64, extra: &QueryParams) -> String {
        title.local_url(&QueryParams::paged(limit, offset, extra), &self.config)
    }
}
