//! 페이지 식별자
//!
//! 탭과 사이드바는 표시 문자열이 아닌 이 식별자로 연결된다.

/// 사이드바 항목과 1:1로 대응하는 기본 페이지
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    Ai,
    Settings,
    Help,
}

impl PageId {
    pub const ALL: [PageId; 4] = [PageId::Home, PageId::Ai, PageId::Settings, PageId::Help];

    pub fn id(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Ai => "ai",
            PageId::Settings => "settings",
            PageId::Help => "help",
        }
    }

    /// 탭 제목 번역 키
    pub fn title_key(self) -> &'static str {
        match self {
            PageId::Home => "dashboard.title",
            PageId::Ai => "ai.title",
            PageId::Settings => "settings.title",
            PageId::Help => "help.title",
        }
    }

    pub fn default_title(self) -> &'static str {
        match self {
            PageId::Home => "Dashboard",
            PageId::Ai => "AI Assistant",
            PageId::Settings => "Settings",
            PageId::Help => "Help",
        }
    }

    /// 사이드바 레이블 번역 키
    pub fn nav_key(self) -> &'static str {
        match self {
            PageId::Home => "sidebar.home",
            PageId::Ai => "sidebar.ai",
            PageId::Settings => "sidebar.settings",
            PageId::Help => "sidebar.help",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Ai => "robot",
            PageId::Settings => "settings",
            PageId::Help => "help",
        }
    }
}

/// 대시보드 카드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardType {
    SeoScore,
    BacklinkMap,
    CompetitorAnalysis,
    KeywordResearch,
    PerformanceTracking,
    ContentAnalysis,
    SiteAudit,
    Reports,
}

impl CardType {
    /// 그리드 배치 순서 (4개씩 2행)
    pub const ALL: [CardType; 8] = [
        CardType::SeoScore,
        CardType::BacklinkMap,
        CardType::CompetitorAnalysis,
        CardType::KeywordResearch,
        CardType::PerformanceTracking,
        CardType::ContentAnalysis,
        CardType::SiteAudit,
        CardType::Reports,
    ];

    pub fn id(self) -> &'static str {
        match self {
            CardType::SeoScore => "seo_score",
            CardType::BacklinkMap => "backlink_map",
            CardType::CompetitorAnalysis => "competitor_analysis",
            CardType::KeywordResearch => "keyword_research",
            CardType::PerformanceTracking => "performance_tracking",
            CardType::ContentAnalysis => "content_analysis",
            CardType::SiteAudit => "site_audit",
            CardType::Reports => "reports",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            CardType::SeoScore => "chart-line",
            CardType::BacklinkMap => "link",
            CardType::CompetitorAnalysis => "target",
            CardType::KeywordResearch => "search",
            CardType::PerformanceTracking => "activity",
            CardType::ContentAnalysis => "file-text",
            CardType::SiteAudit => "tool",
            CardType::Reports => "file",
        }
    }

    pub fn title_key(self) -> String {
        format!("dashboard.cards.{}.title", self.id())
    }

    pub fn description_key(self) -> String {
        format!("dashboard.cards.{}.description", self.id())
    }

    pub fn default_title(self) -> &'static str {
        match self {
            CardType::SeoScore => "SEO Score",
            CardType::BacklinkMap => "Backlink Map",
            CardType::CompetitorAnalysis => "Competitor Analysis",
            CardType::KeywordResearch => "Keyword Research",
            CardType::PerformanceTracking => "Performance Tracking",
            CardType::ContentAnalysis => "Content Analysis",
            CardType::SiteAudit => "Site Audit",
            CardType::Reports => "Reports",
        }
    }

    pub fn default_description(self) -> &'static str {
        match self {
            CardType::SeoScore => "Analyze your website's SEO performance",
            CardType::BacklinkMap => "Visualize your backlink profile",
            CardType::CompetitorAnalysis => "Monitor and compare competitor websites",
            CardType::KeywordResearch => "Find high-performing keywords for your niche",
            CardType::PerformanceTracking => "Track your website's performance over time",
            CardType::ContentAnalysis => "Analyze your content for SEO opportunities",
            CardType::SiteAudit => "Identify and fix technical issues",
            CardType::Reports => "Generate custom SEO reports",
        }
    }
}

/// 탭이 가리키는 페이지
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKey {
    /// 기본 페이지 (탭 중복 불가)
    Primary(PageId),
    /// 카드 상세 placeholder (클릭할 때마다 새 탭)
    CardDetail(CardType),
}

impl PageKey {
    /// 같은 키의 탭이 하나만 허용되는지
    pub fn is_unique(self) -> bool {
        matches!(self, PageKey::Primary(_))
    }

    pub fn primary(self) -> Option<PageId> {
        match self {
            PageKey::Primary(id) => Some(id),
            PageKey::CardDetail(_) => None,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PageKey::Primary(id) => id.icon(),
            PageKey::CardDetail(card) => card.icon(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_icon_map() {
        assert_eq!(CardType::SeoScore.icon(), "chart-line");
        assert_eq!(CardType::Reports.icon(), "file");
        assert_eq!(
            CardType::SiteAudit.title_key(),
            "dashboard.cards.site_audit.title"
        );
    }

    #[test]
    fn test_uniqueness_policy() {
        assert!(PageKey::Primary(PageId::Ai).is_unique());
        assert!(!PageKey::CardDetail(CardType::Reports).is_unique());
        assert_eq!(PageKey::CardDetail(CardType::Reports).primary(), None);
    }
}
