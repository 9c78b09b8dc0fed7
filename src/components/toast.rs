use leptos::*;

/// A single user-visible notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
	pub message: String,
}

/// The notice queue. One per application, provided through context; the
/// auth action dispatcher pushes onto it and the layout renders it.
#[derive(Debug, Clone, Copy)]
pub struct Notifier {
	notices: RwSignal<Vec<Notice>>,
}

impl Notifier {
	pub fn new() -> Self {
		Self {
			notices: create_rw_signal(Vec::new()),
		}
	}

	/// Queue an error notice
	pub fn error(&self, message: impl Into<String>) {
		let message = message.into();
		log::warn!("notice: {message}");
		self.notices.update(|notices| notices.push(Notice { message }));
	}

	/// The currently queued notices, reactively
	pub fn list(&self) -> Vec<Notice> {
		self.notices.get()
	}

	/// Drop all queued notices
	pub fn dismiss_all(&self) {
		self.notices.update(|notices| notices.clear());
	}
}

impl Default for Notifier {
	fn default() -> Self {
		Self::new()
	}
}

/// The toast area rendered by the layout shell
#[component]
pub fn Toast() -> impl IntoView {
	let notifier = expect_context::<Notifier>();

	view! {
		<div class="toast-area">
			{move || {
				let notices = notifier.list();
				if notices.is_empty() {
					().into_view()
				} else {
					view! {
						<div class="toast toast--error">
							<ul>
								{notices
									.into_iter()
									.map(|notice| view! { <li>{notice.message}</li> })
									.collect_view()}
							</ul>
							<button on:click=move |_| notifier.dismiss_all()>
								"×"
							</button>
						</div>
					}
					.into_view()
				}
			}}
		</div>
	}
}
