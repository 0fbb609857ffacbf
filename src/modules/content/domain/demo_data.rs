//! Hand-authored records served when neither the remote API nor the local
//! store can answer. Demo content is read-only.

use chrono::{DateTime, NaiveDate, Utc};

use super::entities::{
    AccessType, BlogPost, ButtonType, ContactLinks, ContentSnapshot, Education, Experience,
    ItemStatus, PortfolioItem, PostStatus, Profile, Skill, SkillCategory,
};

const AUTHOR: &str = "Олег Кононенко";

fn day(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn morning(year: i32, month: u32, d: u32) -> DateTime<Utc> {
    day(year, month, d)
        .and_then(|date| date.and_hms_opt(9, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn profile() -> Profile {
    Profile {
        name: AUTHOR.to_string(),
        title: "Product Manager полного цикла".to_string(),
        description: "Запускаю цифровые продукты от исследования и гипотез до масштабирования. \
                      Соединяю бизнес, дизайн и разработку вокруг измеримых целей."
            .to_string(),
        location: "Москва, Россия".to_string(),
        avatar: "/images/avatar.jpg".to_string(),
        available: true,
        contacts: ContactLinks {
            email: Some("oleg@kononenko.dev".to_string()),
            phone: None,
            telegram: Some("https://t.me/olegkononenko".to_string()),
            linkedin: Some("https://linkedin.com/in/olegkononenko".to_string()),
            github: Some("https://github.com/olegkononenko".to_string()),
            website: None,
        },
    }
}

pub fn experience() -> Vec<Experience> {
    vec![
        Experience {
            id: "1".to_string(),
            title: "Head of Product".to_string(),
            company: "FinTech Solutions".to_string(),
            location: "Москва".to_string(),
            start_date: "2022-03".to_string(),
            end_date: None,
            current: true,
            description: "Руковожу продуктовым направлением платёжной платформы для малого бизнеса."
                .to_string(),
            achievements: strings(&[
                "Вывел на рынок мобильный эквайринг: 40 000 активных мерчантов за год",
                "Сократил time-to-market релизов с 6 до 2 недель",
                "Построил продуктовую аналитику на базе событийной модели",
            ]),
            technologies: strings(&["Amplitude", "Jira", "Figma", "SQL"]),
            priority: 3,
        },
        Experience {
            id: "2".to_string(),
            title: "Senior Product Manager".to_string(),
            company: "E-commerce Group".to_string(),
            location: "Москва".to_string(),
            start_date: "2019-06".to_string(),
            end_date: Some("2022-02".to_string()),
            current: false,
            description: "Отвечал за воронку оформления заказа и программу лояльности.".to_string(),
            achievements: strings(&[
                "Увеличил конверсию checkout на 18%",
                "Запустил программу лояльности с 1,2 млн участников",
            ]),
            technologies: strings(&["Google Analytics", "Miro", "SQL"]),
            priority: 2,
        },
        Experience {
            id: "3".to_string(),
            title: "Product Manager".to_string(),
            company: "EdTech Startup".to_string(),
            location: "Санкт-Петербург".to_string(),
            start_date: "2017-01".to_string(),
            end_date: Some("2019-05".to_string()),
            current: false,
            description: "Развивал платформу онлайн-курсов с нуля до первых платящих клиентов."
                .to_string(),
            achievements: strings(&[
                "Провёл 60+ customer development интервью",
                "Достиг product-market fit в B2B-сегменте",
            ]),
            technologies: strings(&["Figma", "Notion", "Python"]),
            priority: 1,
        },
    ]
}

fn skill(
    id: &str,
    name: &str,
    category: SkillCategory,
    level: u8,
    description: &str,
    priority: i32,
) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        category,
        level: level.clamp(1, 5),
        description: description.to_string(),
        priority,
    }
}

pub fn skills() -> Vec<Skill> {
    vec![
        skill("1", "Product Strategy", SkillCategory::Management, 5, "Видение, стратегия и roadmap продукта", 11),
        skill("2", "Customer Development", SkillCategory::Management, 5, "Интервью, JTBD, проверка гипотез", 10),
        skill("3", "Product Analytics", SkillCategory::Analytics, 5, "Метрики, когортный анализ, A/B-тесты", 9),
        skill("4", "SQL", SkillCategory::Technical, 4, "Самостоятельная работа с данными", 8),
        skill("5", "Agile / Scrum", SkillCategory::Management, 5, "Организация процессов кросс-функциональных команд", 7),
        skill("6", "UX Research", SkillCategory::Design, 4, "Юзабилити-тесты и прототипирование", 6),
        skill("7", "Figma", SkillCategory::Design, 4, "Прототипы и работа с дизайн-системой", 5),
        skill("8", "Unit Economics", SkillCategory::Analytics, 4, "LTV, CAC, модели монетизации", 4),
        skill("9", "API Design", SkillCategory::Technical, 3, "Постановка задач на интеграции", 3),
        skill("10", "Python", SkillCategory::Technical, 3, "Скрипты для анализа данных", 2),
        skill("11", "Public Speaking", SkillCategory::Other, 4, "Выступления на продуктовых конференциях", 1),
    ]
}

pub fn education() -> Vec<Education> {
    vec![
        Education {
            id: "1".to_string(),
            degree: "Магистр, Управление инновациями".to_string(),
            institution: "НИУ ВШЭ".to_string(),
            location: "Москва".to_string(),
            start_date: "2014-09".to_string(),
            end_date: Some("2016-06".to_string()),
            current: false,
            achievements: strings(&["Диплом с отличием"]),
            priority: 2,
        },
        Education {
            id: "2".to_string(),
            degree: "Бакалавр, Прикладная математика".to_string(),
            institution: "СПбГУ".to_string(),
            location: "Санкт-Петербург".to_string(),
            start_date: "2010-09".to_string(),
            end_date: Some("2014-06".to_string()),
            current: false,
            achievements: Vec::new(),
            priority: 1,
        },
    ]
}

pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1".to_string(),
            title: "Как приоритизировать бэклог, когда всё срочно".to_string(),
            slug: "backlog-prioritization".to_string(),
            excerpt: "RICE, ICE и здравый смысл: что работает на практике.".to_string(),
            content: "## Зачем приоритизировать\n\nБэклог без приоритетов превращается в список желаний..."
                .to_string(),
            author: AUTHOR.to_string(),
            published_at: Some(morning(2024, 1, 15)),
            updated_at: morning(2024, 1, 15),
            status: PostStatus::Published,
            tags: strings(&["product", "prioritization"]),
            cover_image: Some("/images/blog/backlog.jpg".to_string()),
            read_time: 7,
        },
        BlogPost {
            id: "2".to_string(),
            title: "Метрики, которые стоит показывать совету директоров".to_string(),
            slug: "board-metrics".to_string(),
            excerpt: "North Star, unit-экономика и честные прогнозы.".to_string(),
            content: "## North Star Metric\n\nОдна метрика, которая отражает ценность для клиента..."
                .to_string(),
            author: AUTHOR.to_string(),
            published_at: Some(morning(2024, 3, 2)),
            updated_at: morning(2024, 3, 10),
            status: PostStatus::Published,
            tags: strings(&["analytics", "metrics"]),
            cover_image: None,
            read_time: 5,
        },
        BlogPost {
            id: "3".to_string(),
            title: "Customer development за две недели".to_string(),
            slug: "customer-development-sprint".to_string(),
            excerpt: "Пошаговый план интервью для новой гипотезы.".to_string(),
            content: "## Неделя первая\n\nФормулируем гипотезы и ищем респондентов...".to_string(),
            author: AUTHOR.to_string(),
            published_at: None,
            updated_at: morning(2024, 4, 20),
            status: PostStatus::Draft,
            tags: strings(&["product", "research"]),
            cover_image: None,
            read_time: 9,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn portfolio_item(
    id: &str,
    title: &str,
    description: &str,
    technologies: &[&str],
    category: &str,
    access: AccessType,
    status: ItemStatus,
    button: (ButtonType, Option<&str>, Option<&str>),
    completed_at: Option<NaiveDate>,
) -> PortfolioItem {
    let (button_type, button_label, button_url) = button;
    PortfolioItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: Some(format!("/images/projects/{}.jpg", id)),
        technologies: strings(technologies),
        category: category.to_string(),
        access,
        status,
        button_type,
        button_label: button_label.map(str::to_string),
        button_url: button_url.map(str::to_string),
        completed_at,
    }
}

pub fn portfolio_items() -> Vec<PortfolioItem> {
    vec![
        portfolio_item(
            "1",
            "Мобильный эквайринг",
            "Приём карт на смартфоне продавца без отдельного терминала.",
            &["Product Strategy", "Analytics", "Mobile"],
            "fintech",
            AccessType::Public,
            ItemStatus::Active,
            (ButtonType::Link, Some("Подробнее"), Some("https://example.com/acquiring")),
            day(2023, 6, 1),
        ),
        portfolio_item(
            "2",
            "Программа лояльности",
            "Кэшбэк-механика и персональные предложения для 1,2 млн покупателей.",
            &["CRM", "A/B Testing", "SQL"],
            "ecommerce",
            AccessType::Public,
            ItemStatus::Active,
            (ButtonType::None, None, None),
            day(2021, 11, 15),
        ),
        portfolio_item(
            "3",
            "Платформа онлайн-курсов",
            "B2B-платформа корпоративного обучения.",
            &["Customer Development", "Figma"],
            "edtech",
            AccessType::Public,
            ItemStatus::Active,
            (ButtonType::Github, Some("Исходный код"), Some("https://github.com/olegkononenko/lms")),
            day(2019, 4, 30),
        ),
        portfolio_item(
            "4",
            "Внутренний дашборд метрик",
            "Единая витрина продуктовых метрик для менеджмента.",
            &["SQL", "Metabase", "Analytics"],
            "analytics",
            AccessType::Private,
            ItemStatus::Active,
            (ButtonType::None, None, None),
            day(2022, 9, 1),
        ),
        portfolio_item(
            "5",
            "Чат-бот поддержки",
            "Автоматизация первой линии поддержки; проект закрыт после пилота.",
            &["NLP", "Python"],
            "fintech",
            AccessType::Public,
            ItemStatus::Archived,
            (ButtonType::None, None, None),
            None,
        ),
    ]
}

impl ContentSnapshot {
    /// The default state tree: every collection filled with demo records.
    pub fn demo() -> Self {
        Self {
            profile: profile(),
            experience: experience(),
            skills: skills(),
            education: education(),
            blog_posts: blog_posts(),
            portfolio_items: portfolio_items(),
        }
    }
}
