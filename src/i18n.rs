//! The two supported locales and their UI string tables

use chrono::Weekday;

/// A supported display language
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Language {
    Zh,
    En,
}

impl Language {
    /// The first day of the week in this locale's convention
    pub fn week_start(&self) -> Weekday {
        match self {
            Language::Zh => Weekday::Mon,
            Language::En => Weekday::Sun,
        }
    }

    /// The hint passed to the speech-recognition capability
    pub fn speech_hint(&self) -> &'static str {
        match self {
            Language::Zh => "zh-CN",
            Language::En => "en-US",
        }
    }

    /// The other supported language
    pub fn toggled(&self) -> Language {
        match self {
            Language::Zh => Language::En,
            Language::En => Language::Zh,
        }
    }

    /// The UI strings for this language
    pub fn translations(&self) -> &'static Translations {
        match self {
            Language::Zh => &ZH,
            Language::En => &EN,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Zh
    }
}

/// Every user-facing string of the application, for one language
pub struct Translations {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub add_event: &'static str,
    pub me: &'static str,
    pub analyzing: &'static str,
    pub reminder: &'static str,
    pub no_image: &'static str,
    pub import_album: &'static str,
    pub take_photo: &'static str,
    pub voice_input: &'static str,
    pub listening: &'static str,
    pub profile_name: &'static str,
    pub setting_notify: &'static str,
    pub setting_pref: &'static str,
    pub setting_fav: &'static str,
    pub setting_logout: &'static str,
    pub default_quote: &'static str,
    pub edit_plan: &'static str,
    pub new_plan: &'static str,
    pub field_name: &'static str,
    pub field_date: &'static str,
    pub field_time: &'static str,
    pub field_place: &'static str,
    pub field_reminder: &'static str,
    pub field_theme: &'static str,
    pub save: &'static str,
    pub delete: &'static str,
    pub today: &'static str,
    /// Reminder unit names, in `{none, minutes, hours, days}` order
    pub reminder_units: [&'static str; 4],
}

static ZH: Translations = Translations {
    title: "青苹果日历",
    subtitle: "每日开心一句",
    add_event: "计划",
    me: "我",
    analyzing: "AI 捕捉中...",
    reminder: "要开始了!",
    no_image: "无法识别，请换个方式 📸",
    import_album: "相册导入",
    take_photo: "拍摄照片",
    voice_input: "语音输入",
    listening: "请说话...",
    profile_name: "时光旅人",
    setting_notify: "提醒",
    setting_pref: "偏好",
    setting_fav: "收藏",
    setting_logout: "退出",
    default_quote: "今天也要像苹果一样清脆乐观！",
    edit_plan: "编辑计划",
    new_plan: "新增计划",
    field_name: "事件名称",
    field_date: "日期",
    field_time: "时间",
    field_place: "地点",
    field_reminder: "提醒",
    field_theme: "主题配色",
    save: "保 存 计 划",
    delete: "删除",
    today: "今天",
    reminder_units: ["无", "分钟", "小时", "天"],
};

static EN: Translations = Translations {
    title: "Lumina",
    subtitle: "A Happy Daily Note",
    add_event: "Plans",
    me: "Me",
    analyzing: "AI Capturing...",
    reminder: "is starting!",
    no_image: "Detection failed. Try another! 📸",
    import_album: "Album",
    take_photo: "Camera",
    voice_input: "Voice Input",
    listening: "Listening...",
    profile_name: "Time Traveler",
    setting_notify: "Alerts",
    setting_pref: "Settings",
    setting_fav: "Favs",
    setting_logout: "Logout",
    default_quote: "Stay crisp and optimistic today!",
    edit_plan: "Edit Plan",
    new_plan: "New Plan",
    field_name: "Event Name",
    field_date: "Date",
    field_time: "Time",
    field_place: "Location",
    field_reminder: "Alert",
    field_theme: "Theme Color",
    save: "Save Plan",
    delete: "Delete",
    today: "Today",
    reminder_units: ["None", "Min", "Hrs", "Days"],
};
