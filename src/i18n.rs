use leptos::*;

/// The locales the application ships content for
pub const SUPPORTED_LOCALES: &[&str] = &["en", "ru"];
/// The locale used when none is specified
pub const DEFAULT_LOCALE: &str = "en";

/// Whether a locale segment belongs to the supported set
pub fn is_supported(lang: &str) -> bool {
	SUPPORTED_LOCALES.contains(&lang)
}

/// The phrase table for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phrases {
	pub brand: &'static str,
	pub home_title: &'static str,
	pub home_lede: &'static str,
	pub trainer_title: &'static str,
	pub trainer_lede: &'static str,
	pub help_title: &'static str,
	pub help_lede: &'static str,
	pub login_title: &'static str,
	pub signup_title: &'static str,
	pub profile_title: &'static str,
	pub email_label: &'static str,
	pub password_label: &'static str,
	pub first_name_label: &'static str,
	pub last_name_label: &'static str,
	pub submit_login: &'static str,
	pub submit_signup: &'static str,
	pub submit_save: &'static str,
	pub logout: &'static str,
	pub field_required: &'static str,
	pub nothing_to_update: &'static str,
	pub detect_location: &'static str,
	pub not_found: &'static str,
	pub go_home: &'static str,
	pub go_trainer: &'static str,
	pub choose_language: &'static str,
}

static EN: Phrases = Phrases {
	brand: "KeyPress",
	home_title: "Welcome to KeyPress",
	home_lede: "Learn a language with your fingertips.",
	trainer_title: "Trainer",
	trainer_lede: "Type the phrase below as fast as you can.",
	help_title: "Help",
	help_lede: "How the trainer, lessons and scoring work.",
	login_title: "Login",
	signup_title: "Sign up",
	profile_title: "Profile",
	email_label: "Email",
	password_label: "Password",
	first_name_label: "First name",
	last_name_label: "Last name",
	submit_login: "Log in",
	submit_signup: "Create account",
	submit_save: "Save",
	logout: "Log out",
	field_required: "This field is required",
	nothing_to_update: "Nothing to update",
	detect_location: "Detect my region",
	not_found: "Page not found",
	go_home: "Home",
	go_trainer: "Trainer",
	choose_language: "Choose language",
};

static RU: Phrases = Phrases {
	brand: "KeyPress",
	home_title: "Добро пожаловать в KeyPress",
	home_lede: "Учите язык кончиками пальцев.",
	trainer_title: "Тренажёр",
	trainer_lede: "Наберите фразу ниже как можно быстрее.",
	help_title: "Помощь",
	help_lede: "Как устроены тренажёр, уроки и подсчёт очков.",
	login_title: "Вход",
	signup_title: "Регистрация",
	profile_title: "Профиль",
	email_label: "Эл. почта",
	password_label: "Пароль",
	first_name_label: "Имя",
	last_name_label: "Фамилия",
	submit_login: "Войти",
	submit_signup: "Создать аккаунт",
	submit_save: "Сохранить",
	logout: "Выйти",
	field_required: "Обязательное поле",
	nothing_to_update: "Нечего обновлять",
	detect_location: "Определить мой регион",
	not_found: "Страница не найдена",
	go_home: "Главная",
	go_trainer: "Тренажёр",
	choose_language: "Выбор языка",
};

fn phrases_for(lang: &str) -> &'static Phrases {
	match lang {
		"ru" => &RU,
		_ => &EN,
	}
}

/// The active locale. Changing it swaps the phrase set, which reloads all
/// rendered content reactively.
#[derive(Debug, Clone, Copy)]
pub struct LocaleStore {
	current: RwSignal<String>,
}

impl LocaleStore {
	/// Create a store with the default locale active
	pub fn new() -> Self {
		Self {
			current: create_rw_signal(DEFAULT_LOCALE.to_owned()),
		}
	}

	/// The active locale, reactively
	pub fn current(&self) -> String {
		self.current.get()
	}

	/// The active locale without subscribing
	pub fn current_untracked(&self) -> String {
		self.current.get_untracked()
	}

	/// The phrase table of the active locale, reactively
	pub fn phrases(&self) -> &'static Phrases {
		self.current.with(|lang| phrases_for(lang))
	}

	/// Activate a supported locale. Unsupported values are ignored; the
	/// router resolves those to not-found before ever calling this.
	pub fn change(&self, lang: &str) {
		if !is_supported(lang) {
			return;
		}

		if self.current.with_untracked(|current| current != lang) {
			log::info!("switching locale to {lang}");
			self.current.set(lang.to_owned());
		}
	}
}

impl Default for LocaleStore {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use leptos::create_runtime;

	use super::*;

	#[test]
	fn change_activates_supported_locales_only() {
		let runtime = create_runtime();
		let locale = LocaleStore::new();

		locale.change("ru");
		assert_eq!(locale.current_untracked(), "ru");

		locale.change("xx");
		assert_eq!(locale.current_untracked(), "ru");
		runtime.dispose();
	}

	#[test]
	fn phrase_set_follows_the_active_locale() {
		let runtime = create_runtime();
		let locale = LocaleStore::new();

		assert_eq!(locale.phrases().login_title, "Login");
		locale.change("ru");
		assert_eq!(locale.phrases().login_title, "Вход");
		runtime.dispose();
	}
}
