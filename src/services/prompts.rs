//! Fixed prompt templates sent to the text-generation provider

/// Template names used in logs
pub const COURSE_DESCRIPTION: &str = "course_description";
pub const BUILD_PROMPT: &str = "build_prompt";

/// Ask for a two-sentence promotional course description, in Uzbek
pub fn course_description(course_title: &str) -> String {
    format!(
        "O'quv markazi uchun \"{}\" nomli kurs haqida professional va qiziqarli 2 jumlali tavsif matnini O'ZBEK tilida yarating.",
        course_title
    )
}

/// Ask for a detailed technical instruction for an AI coding agent that builds
/// the registration bot and its API backend from `requirements`
pub fn build_prompt(requirements: &str) -> String {
    format!(
        "Siz jahon miqyosidagi senior full-stack muhandissiz. \
         Quyidagi talablar asosida Telegram bot va Express API backendini qurish uchun AI Koder (Cursor yoki Windsurf kabi) uchun juda batafsil texnik promt yozing. \
         Promt ingliz tilida bo'lishi mumkin (dasturlash uchun qulay), lekin tizim o'zbek tilini qo'llab-quvvatlashi kerak. \
         Talablar: {}. \
         Ma'lumotlar bazasi (PostgreSQL), xavfsizlik va API endpointlar tuzilmasini kiriting.",
        requirements
    )
}
