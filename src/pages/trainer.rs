use leptos::*;

use crate::i18n::LocaleStore;

/// The practice phrases, keyed by locale
fn drill_for(lang: &str) -> &'static str {
	match lang {
		"ru" => "съешь же ещё этих мягких французских булок",
		_ => "the quick brown fox jumps over the lazy dog",
	}
}

/// The typing trainer
#[component]
pub fn TrainerPage() -> impl IntoView {
	let locale = expect_context::<LocaleStore>();

	let typed = create_rw_signal(String::new());
	let drill = move || drill_for(&locale.current());
	let hits = move || {
		let typed = typed.get();
		drill()
			.chars()
			.zip(typed.chars())
			.take_while(|(expected, got)| expected == got)
			.count()
	};

	view! {
		<section class="page page--trainer">
			<h1>{move || locale.phrases().trainer_title}</h1>
			<p>{move || locale.phrases().trainer_lede}</p>

			<p class="trainer__drill"><code>{drill}</code></p>

			<input
				class="trainer__input"
				prop:value=move || typed.get()
				on:input=move |ev| typed.set(event_target_value(&ev))
			/>

			<p class="trainer__score">
				{move || format!("{} / {}", hits(), drill().chars().count())}
			</p>
		</section>
	}
}
