//! Static page content.
//!
//! Every section renders from these arrays; nothing here is mutated at
//! runtime. Module and pain point ids must be unique because the accordion and
//! list keys depend on them.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::util::scroll::{PRICING_SECTION_ID, PROGRAM_SECTION_ID, RESULTS_SECTION_ID};

pub const BRAND: &str = "GPT-ПРАКТИК";
pub const START_BADGE: &str = "Старт группы 6 октября";
pub const CHOOSE_TARIFF: &str = "Выбрать тариф";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PainPoint {
    pub id: u32,
    pub text: &'static str,
}

/// One curriculum unit shown as an accordion panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Module {
    pub id: u32,
    pub title: &'static str,
    pub points: &'static [&'static str],
    pub result: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assistant {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    /// Current price in roubles.
    pub price: u32,
    /// Crossed-out price in roubles.
    pub old_price: u32,
    pub price_eur: u32,
    pub features: &'static [&'static str],
    pub popular: bool,
    pub spots: Option<&'static str>,
    pub button_text: &'static str,
}

/// Accent used by hero stat icons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Lime,
    Pink,
    Purple,
    Cyan,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Self::Lime => "accent-lime",
            Self::Pink => "accent-pink",
            Self::Purple => "accent-purple",
            Self::Cyan => "accent-cyan",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub accent: Accent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub section_id: &'static str,
}

/// One row of the investment comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CostLine {
    pub label: &'static str,
    pub cost: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Программа", section_id: PROGRAM_SECTION_ID },
    NavLink { label: "Результат", section_id: RESULTS_SECTION_ID },
    NavLink { label: "Тарифы", section_id: PRICING_SECTION_ID },
];

pub const HERO_STATS: &[Stat] = &[
    Stat { icon: "video", label: "Формат", value: "Живые воркшопы", accent: Accent::Lime },
    Stat { icon: "calendar", label: "Длительность", value: "8 недель", accent: Accent::Pink },
    Stat { icon: "layers", label: "Программа", value: "5 модулей", accent: Accent::Purple },
    Stat { icon: "star", label: "Результат", value: "Система", accent: Accent::Cyan },
];

pub const TICKER_ITEMS: &[&str] =
    &["СИСТЕМА", "ПРОДАЖИ", "КОНТЕНТ", "AI", "СВОБОДА", "GPT", "СТРАТЕГИЯ", "ДЕНЬГИ", "БЛОГ"];

/// How many times the ticker row is repeated to fill the marquee.
pub const TICKER_REPEAT: usize = 4;

pub const PAIN_POINTS: &[PainPoint] = &[
    PainPoint { id: 1, text: "Ведёшь блог урывками: то пусто, то густо, а системы нет" },
    PainPoint { id: 2, text: "Тратишь часы на один пост и всё равно не уверен в результате" },
    PainPoint { id: 3, text: "Пробовал ChatGPT, но тексты выходят шаблонными и «не твоими»" },
    PainPoint { id: 4, text: "Контент есть, а заявок на услуги и продукты почти нет" },
    PainPoint { id: 5, text: "Нет понимания, как собрать прогрев и воронку из своих смыслов" },
    PainPoint { id: 6, text: "Хочешь делегировать рутину, но не готов платить SMM-специалисту" },
];

pub const PROGRAM_MODULES: &[Module] = &[
    Module {
        id: 1,
        title: "Фундамент: твоя личная нейросеть",
        points: &[
            "Разбираем, как устроен ChatGPT и где он реально экономит время",
            "Собираем базу знаний о тебе, продукте и аудитории",
            "Настраиваем персонального ассистента под твой стиль",
        ],
        result: "Нейросеть, которая знает тебя и пишет твоими словами",
    },
    Module {
        id: 2,
        title: "Смыслы и позиционирование",
        points: &[
            "Распаковка экспертности и ценностей с помощью GPT",
            "Портрет клиента: боли, желания, возражения",
            "Формулируем оффер, который хочется купить",
        ],
        result: "Чёткое позиционирование и банк смыслов для контента",
    },
    Module {
        id: 3,
        title: "Контент-система",
        points: &[
            "Контент-план на месяц за один вечер",
            "Посты, сторис и сценарии рилс с ассистентами",
            "Редактура: убираем «нейросетевой» стиль из текстов",
        ],
        result: "Контент создаётся стабильно и без выгорания",
    },
    Module {
        id: 4,
        title: "Прогревы и воронки",
        points: &[
            "Структура прогрева под запуск или услугу",
            "Автоворонка: от первого касания до заявки",
            "Тексты для продающих эфиров и рассылок",
        ],
        result: "Собранная воронка, которая приводит клиентов",
    },
    Module {
        id: 5,
        title: "Визуал и видео с ИИ",
        points: &[
            "Обложки, карточки и визуал в едином стиле",
            "Сценарии и монтаж коротких видео с нейросетями",
            "Упаковка профиля и актуальных",
        ],
        result: "Визуал и видео делаются быстрее и лучше, чем вручную",
    },
];

pub const ASSISTANTS: &[Assistant] = &[
    Assistant { name: "Распаковщик", description: "Помогает вытащить смыслы, кейсы и ценности из твоего опыта" },
    Assistant { name: "Контент-планер", description: "Собирает контент-план под цели блога и запуски" },
    Assistant { name: "Копирайтер", description: "Пишет посты твоим голосом, а не шаблонами" },
    Assistant { name: "Сценарист", description: "Готовит сценарии рилс и сторис с хуками" },
    Assistant { name: "Прогревщик", description: "Выстраивает прогрев к продукту по шагам" },
    Assistant { name: "Редактор", description: "Убирает воду и канцелярит, усиливает текст" },
    Assistant { name: "Маркетолог", description: "Анализирует аудиторию и подсказывает офферы" },
    Assistant { name: "Дизайнер", description: "Генерирует идеи визуала и промты для картинок" },
];

/// Total number of assistants shipped with the course, including unlisted ones.
pub const ASSISTANTS_TOTAL: u32 = 13;

pub const FORMAT_POINTS: &[&str] = &[
    "8 недель живых воркшопов в Zoom",
    "Каждый созвон заканчивается готовым результатом",
    "Домашние задания с обратной связью",
    "Закрытый чат участников",
    "Записи всех встреч остаются навсегда",
];

pub const COST_COMPARISON: &[CostLine] = &[
    CostLine { label: "SMM-специалист", cost: "20-40 тыс/мес" },
    CostLine { label: "Продюсер", cost: "50% с запуска" },
];

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Самостоятельный",
        price: 24_900,
        old_price: 39_900,
        price_eur: 270,
        features: &[
            "Все воркшопы в записи",
            "13 GPT-ассистентов",
            "Закрытый чат",
            "Проверка домашних заданий (нет)",
            "Личный разбор блога (нет)",
        ],
        popular: false,
        spots: None,
        button_text: "Выбрать",
    },
    PricingTier {
        name: "С куратором",
        price: 49_900,
        old_price: 69_900,
        price_eur: 540,
        features: &[
            "Живые воркшопы",
            "13 GPT-ассистентов",
            "Закрытый чат",
            "Проверка домашних заданий",
            "Личный разбор блога (нет)",
        ],
        popular: true,
        spots: Some("15"),
        button_text: "Забронировать место",
    },
    PricingTier {
        name: "VIP",
        price: 149_000,
        old_price: 199_000,
        price_eur: 1_600,
        features: &[
            "Живые воркшопы",
            "13 GPT-ассистентов",
            "Закрытый чат",
            "Проверка домашних заданий",
            "Личный разбор блога",
        ],
        popular: false,
        spots: Some("3"),
        button_text: "Подать заявку",
    },
];

pub const AUTHOR_HANDLE: &str = "@alex_neuro";
pub const AUTHOR_NAME: &str = "Алексей Нейро";
pub const AUTHOR_PHOTO_URL: &str =
    "https://images.unsplash.com/photo-1560250097-0b93528c311a?q=80&w=1000&auto=format&fit=crop";

pub const AUTHOR_STATS: &[Stat] = &[
    Stat { icon: "users", label: "Учеников", value: "500+", accent: Accent::Lime },
    Stat { icon: "briefcase", label: "Проектов", value: "50+", accent: Accent::Pink },
];
