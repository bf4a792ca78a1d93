use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Conversation {
    id: u32,
    name: &'static str,
    preview: &'static str,
    time: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Message {
    from_admin: bool,
    body: String,
    time: &'static str,
}

fn seed_conversations() -> Vec<Conversation> {
    vec![
        Conversation { id: 1, name: "MIT", preview: "Thank you for the verification!", time: "10:42 AM" },
        Conversation { id: 2, name: "Stanford University", preview: "When will our documents be reviewed?", time: "9:15 AM" },
        Conversation { id: 3, name: "Dr. John Smith", preview: "I need help with my account.", time: "Yesterday" },
        Conversation { id: 4, name: "Yale University", preview: "We updated our profile details.", time: "Yesterday" },
    ]
}

fn seed_messages() -> Vec<Message> {
    vec![
        Message { from_admin: false, body: "Hello, we submitted our verification documents last week.".into(), time: "10:30 AM" },
        Message { from_admin: true, body: "Thanks for reaching out. Your institute has been approved.".into(), time: "10:40 AM" },
        Message { from_admin: false, body: "Thank you for the verification!".into(), time: "10:42 AM" },
    ]
}

/// Local-only messaging mock; conversations and history live in component
/// state until a messaging backend exists.
#[function_component(ChatPage)]
pub fn chat_page() -> Html {
    let conversations = use_state(seed_conversations);
    let selected = use_state(|| 1u32);
    let messages = use_state(seed_messages);
    let query = use_state(String::new);
    let draft = use_state(String::new);

    let on_query = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                query.set(input.value());
            }
        })
    };

    let on_draft = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                draft.set(input.value());
            }
        })
    };

    let on_send = {
        let draft = draft.clone();
        let messages = messages.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let body = draft.trim().to_string();
            if body.is_empty() {
                return;
            }
            let mut next = (*messages).clone();
            next.push(Message { from_admin: true, body, time: "Now" });
            messages.set(next);
            draft.set(String::new());
        })
    };

    let needle = query.to_lowercase();
    let visible: Vec<Conversation> = conversations
        .iter()
        .filter(|conversation| {
            needle.is_empty() || conversation.name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    let active_name = conversations
        .iter()
        .find(|conversation| conversation.id == *selected)
        .map(|conversation| conversation.name)
        .unwrap_or("Conversation");

    html! {
        <div class="flex h-[calc(100vh-8rem)] bg-white rounded-xl shadow-sm overflow-hidden">
            <aside class="w-72 border-r border-gray-100 flex flex-col">
                <div class="p-4 border-b border-gray-100">
                    <input
                        type="text"
                        placeholder="Search conversations..."
                        value={(*query).clone()}
                        oninput={on_query}
                        class="w-full px-3 py-2 border border-gray-200 rounded-lg text-sm"
                    />
                </div>
                <div class="flex-1 overflow-y-auto">
                    { for visible.into_iter().map(|conversation| {
                        let is_active = conversation.id == *selected;
                        let on_select = {
                            let selected = selected.clone();
                            let id = conversation.id;
                            Callback::from(move |_: MouseEvent| selected.set(id))
                        };
                        html! {
                            <button
                                onclick={on_select}
                                class={classes!(
                                    "w-full", "text-left", "px-4", "py-3", "border-b", "border-gray-50",
                                    is_active.then_some("bg-indigo-50"),
                                )}
                            >
                                <div class="flex justify-between items-center">
                                    <span class="font-medium text-gray-800 text-sm">{ conversation.name }</span>
                                    <span class="text-xs text-gray-400">{ conversation.time }</span>
                                </div>
                                <p class="text-xs text-gray-500 truncate mt-1">{ conversation.preview }</p>
                            </button>
                        }
                    }) }
                </div>
            </aside>

            <section class="flex-1 flex flex-col">
                <div class="px-6 py-4 border-b border-gray-100">
                    <h3 class="font-semibold text-gray-800">{ active_name }</h3>
                </div>
                <div class="flex-1 overflow-y-auto p-6 space-y-4">
                    { for messages.iter().map(|message| {
                        let bubble = if message.from_admin {
                            "ml-auto bg-indigo-500 text-white"
                        } else {
                            "mr-auto bg-gray-100 text-gray-800"
                        };
                        html! {
                            <div class={classes!("max-w-md", "rounded-xl", "px-4", "py-2", bubble)}>
                                <p class="text-sm">{ message.body.clone() }</p>
                                <span class="text-xs opacity-70">{ message.time }</span>
                            </div>
                        }
                    }) }
                </div>
                <form onsubmit={on_send} class="p-4 border-t border-gray-100 flex items-center gap-3">
                    <input
                        type="text"
                        placeholder="Type a message..."
                        value={(*draft).clone()}
                        oninput={on_draft}
                        class="flex-1 px-4 py-2 border border-gray-200 rounded-lg text-sm"
                    />
                    <button
                        type="submit"
                        class="bg-indigo-500 hover:bg-indigo-600 text-white p-2 rounded-lg"
                    >
                        <Icon icon_id={IconId::HeroiconsOutlinePaperAirplane} class="w-5 h-5" />
                    </button>
                </form>
            </section>
        </div>
    }
}
