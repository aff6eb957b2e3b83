//! # Menu Pages
//!
//! Static navigation pages built from the catalog. Each function returns the full
//! reply, keyboard included.

use crate::domain::action::Action;
use crate::domain::catalog::{PRICE_LIST, ServiceTopic, company};
use crate::domain::types::{Button, Reply};

const RULE: &str = "─────────────────────";

fn back_row() -> Vec<Button> {
    vec![Button::action("◀️ Back", Action::MainMenu)]
}

pub fn main_menu_keyboard() -> Vec<Vec<Button>> {
    vec![
        vec![
            Button::action("🏠 Ceilings", Action::CeilingMenu),
            Button::action("📐 Calculator", Action::Calculator),
        ],
        vec![
            Button::action("💰 Prices", Action::Prices),
            Button::action("📞 Contacts", Action::Contacts),
        ],
        vec![
            Button::action("📞 Request a call", Action::RequestCall),
            Button::action("🏗️ Portfolio", Action::Portfolio),
        ],
    ]
}

/// Any text followed by the main menu.
pub fn with_main_menu(text: impl Into<String>) -> Reply {
    Reply::text(text).with_keyboard(main_menu_keyboard())
}

pub fn welcome() -> Reply {
    with_main_menu(format!(
        "🎉 **Welcome to {}!**\n\n\
         {}\n\
         \"{}\"\n\n\
         {RULE}\n\n\
         ✨ **We specialize in:**\n\
         • Premium stretch ceilings\n\
         • Multi-level ceilings with lighting\n\
         • Turnkey renovation\n\
         • Interior design\n\n\
         {RULE}\n\n\
         📐 Estimate the price with the calculator\n\
         📞 Book a free measurement\n\
         🏗️ See our work\n\n\
         👇 Choose a section:",
        company::NAME,
        company::FULL_NAME,
        company::SLOGAN,
    ))
}

fn topic_keyboard() -> Vec<Vec<Button>> {
    let topics = [
        ServiceTopic::Stretch,
        ServiceTopic::MultiLevel,
        ServiceTopic::PhotoPrint3d,
        ServiceTopic::PhotoWallpaper,
        ServiceTopic::Fabric,
        ServiceTopic::Satin,
        ServiceTopic::Glossy,
        ServiceTopic::Matte,
    ];
    topics
        .chunks(2)
        .map(|pair| {
            pair.iter()
                .map(|t| Button::action(t.label(), Action::ServiceInfo(*t)))
                .collect()
        })
        .collect()
}

pub fn ceilings() -> Reply {
    let mut keyboard = topic_keyboard();
    keyboard.push(back_row());
    Reply::text(format!(
        "🏠 **Ceiling types**\n\n{RULE}\n\nChoose a ceiling type to learn more:\n\n💡 Use the buttons below ⬇️"
    ))
    .with_keyboard(keyboard)
}

fn price_lines(prefix: &str) -> String {
    PRICE_LIST
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}. **{}**\n   {prefix}{}\n", i + 1, p.name, p.price))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn services() -> Reply {
    let mut keyboard = topic_keyboard();
    keyboard.push(vec![
        Button::action("🔨 Turnkey renovation", Action::ServiceInfo(ServiceTopic::Renovation)),
        Button::action("🎨 Interior design", Action::ServiceInfo(ServiceTopic::Design)),
    ]);
    keyboard.push(vec![
        Button::action("📐 Calculator", Action::Calculator),
        Button::action("◀️ Back", Action::MainMenu),
    ]);
    Reply::text(format!(
        "💼 **OUR SERVICES**\n\n{RULE}\n\n{}\n{RULE}\n\n💡 **Want to know more?**\nPick a service below ⬇️",
        price_lines("💵 ")
    ))
    .with_keyboard(keyboard)
}

pub fn prices() -> Reply {
    Reply::text(format!(
        "💰 **PRICES**\n\n{RULE}\n\n{}\n{RULE}\n\n\
         💡 The final cost depends on:\n\
         📐 Room area\n\
         🎨 Complexity of the work\n\
         🏗️ Chosen materials\n\n\
         {RULE}\n\n\
         🎁 **Want an exact quote?**\nUse the calculator or request a call!",
        price_lines("")
    ))
    .with_keyboard(vec![
        vec![
            Button::action("📐 Calculate", Action::Calculator),
            Button::action("📞 Request a call", Action::RequestCall),
        ],
        back_row(),
    ])
}

pub fn service_info(topic: ServiceTopic) -> Reply {
    let price = |i: usize| PRICE_LIST[i].price;
    let text = match topic {
        ServiceTopic::Stretch => format!(
            "**STRETCH CEILINGS**\n\n{RULE}\n\n💰 Price: {}\n\n{RULE}\n\n\
             ✨ **Advantages:**\n⚡ Fast installation (1-2 days)\n💧 Waterproof\n🎨 Many textures and colors\n✅ Quality guarantee\n💡 Efficient lighting\n\n{RULE}\n\n\
             🏠 **Ideal for:**\n• Apartments and houses\n• Offices and commercial spaces\n• Bathrooms and kitchens\n\n{RULE}\n\n\
             💬 Want to know more?\nBook a consultation!",
            price(0)
        ),
        ServiceTopic::MultiLevel => format!(
            "**MULTI-LEVEL CEILINGS**\n\n{RULE}\n\n💰 Price: {}\n\n{RULE}\n\n\
             🌟 **Features:**\n🎨 Modern design\n💡 Lighting on every level\n📐 Visually larger space\n🎯 Individual solutions\n\n{RULE}\n\n\
             ✅ **Advantages:**\n• A unique interior\n• Hidden utilities\n• Space zoning\n• A luxurious look\n\n{RULE}\n\n\
             🎁 **Offer:**\nA free 3D project with your order!",
            price(1)
        ),
        ServiceTopic::PhotoPrint3d => format!(
            "**3D CEILINGS WITH PHOTO PRINT**\n\n{RULE}\n\n💰 Price: {}\n\n{RULE}\n\n\
             🎨 **Possibilities:**\n📷 High-quality photo print\n🎨 Any design you like\n🌟 Depth effect\n✨ A one-of-a-kind result\n\n{RULE}\n\n\
             ✨ **Where to use:**\n• Children's rooms\n• Bedrooms\n• Living rooms\n• Play areas\n\n{RULE}\n\n\
             🎁 **Offer:**\nBring your own picture and we will print it!",
            price(2)
        ),
        ServiceTopic::Renovation => format!(
            "**TURNKEY RENOVATION**\n\n{RULE}\n\n💰 Price: on request\n\n{RULE}\n\n\
             🏠 **What is included:**\n🔨 The full scope of work\n🏗️ From demolition to final finishing\n👷 Author supervision\n✅ Warranty on all work\n\n{RULE}\n\n\
             📋 **Stages:**\n1️⃣ Design and estimate\n2️⃣ Demolition\n3️⃣ Rough finishing\n4️⃣ Final finishing\n5️⃣ Furniture and decor\n\n{RULE}\n\n\
             🎁 **Bonus:**\nFree on-site measurement!"
        ),
        ServiceTopic::Design => format!(
            "**INTERIOR DESIGN**\n\n{RULE}\n\n💰 Price: on request\n\n{RULE}\n\n\
             ✨ **Services:**\n🎨 Concept development\n📐 Layout planning\n🎬 3D visualization\n👷 Author supervision\n\n{RULE}\n\n\
             💼 **You get:**\n• An individual design\n• Photorealistic 3D renders\n• Material selection\n• A cost estimate\n\n{RULE}\n\n\
             🎁 **Offer:**\nThe first visit is free!"
        ),
        ServiceTopic::PhotoWallpaper => format!(
            "**Photo wallpaper ceilings**\n\nPrice: {}\n\n🖼️ **Features:**\n• High-quality photo print\n• Any design you like\n• Depth effect\n• Moisture resistant\n\nWe create a unique interior from your photos!",
            price(3)
        ),
        ServiceTopic::Fabric => format!(
            "**Fabric ceilings**\n\nPrice: {}\n\n🌟 **Advantages:**\n• Eco-friendly materials\n• Durable\n• A wide range of colors\n• Safe for health\n\nIdeal for children's rooms and bedrooms!",
            price(4)
        ),
        ServiceTopic::Satin => format!(
            "**Satin ceilings**\n\nPrice: {}\n\n✨ **Features:**\n• Velvety texture\n• Diffuses light\n• No glare\n• Neutral shades\n\nA great choice for living rooms!",
            price(0)
        ),
        ServiceTopic::Glossy => format!(
            "**Glossy ceilings**\n\nPrice: {}\n\n✨ **Advantages:**\n• Mirror effect\n• Visually enlarges the room\n• A bright, shiny look\n• Easy to clean\n\nGreat for small rooms!",
            price(0)
        ),
        ServiceTopic::Matte => format!(
            "**Matte ceilings**\n\nPrice: {}\n\n🌟 **Features:**\n• A classic look\n• Neutral shades\n• Abrasion resistant\n• Durable\n\nA universal solution for any interior!",
            price(0)
        ),
    };
    Reply::text(text).with_keyboard(vec![
        vec![
            Button::url("📞 Get a quote", company::phone_url()),
            Button::url("💬 Write in Telegram", company::telegram_url()),
        ],
        vec![
            Button::action("◀️ Back to services", Action::Services),
            Button::action("🏠 Main menu", Action::MainMenu),
        ],
    ])
}

fn contacts_keyboard() -> Vec<Vec<Button>> {
    vec![
        vec![
            Button::url("💬 Telegram", company::telegram_url()),
            Button::url("📱 VK", company::vk_url()),
        ],
        vec![Button::url("📸 Instagram", company::instagram_url())],
        vec![Button::action(format!("📞 Phone: {}", company::PHONE), Action::Phone)],
        back_row(),
    ]
}

pub fn contacts() -> Reply {
    Reply::text(format!(
        "📞 **OUR CONTACTS**\n\n{RULE}\n\n\
         💬 Telegram:\n@{}\n\n\
         📱 VK:\nvk.com/{}\n\n\
         📸 Instagram:\n@{}\n\n\
         {RULE}\n\n\
         🕒 **Working hours:**\n{}\n\n\
         {RULE}\n\n\
         📞 **Need a call?**\nUse the buttons below ⬇️",
        company::TELEGRAM,
        company::VK,
        company::INSTAGRAM,
        company::WORKING_HOURS,
    ))
    .with_keyboard(contacts_keyboard())
}

/// Short contacts page used as the keyword reply.
pub fn contacts_short() -> Reply {
    Reply::text("Our contact details:").with_keyboard(contacts_keyboard())
}

pub fn phone() -> Reply {
    Reply::text(format!(
        "📞 **OUR PHONE**\n\n{RULE}\n\n{}\n\n{RULE}\n\n\
         🕒 **Working hours:**\n{}\n\n{RULE}\n\n\
         💡 If we did not answer, write to us in Telegram!",
        company::PHONE,
        company::WORKING_HOURS,
    ))
    .with_keyboard(vec![
        vec![
            Button::url("📞 Call", company::phone_url()),
            Button::url("💬 Write in Telegram", company::telegram_url()),
        ],
        back_row(),
    ])
}

pub fn portfolio() -> Reply {
    Reply::text(format!(
        "🏗️ **OUR PORTFOLIO**\n\n{RULE}\n\n\
         📸 More than {objects} projects completed!\n\n{RULE}\n\n\
         🎨 **Our work:**\n\
         • Stretch ceilings in apartments and houses\n\
         • Multi-level ceilings with lighting\n\
         • 3D ceilings with photo print\n\
         • Turnkey renovation\n\n{RULE}\n\n\
         📊 **In numbers:**\n\
         • {objects} completed projects\n\
         • {clients} happy clients\n\
         • {years} years of experience\n\
         • {satisfaction} recommend us\n\n{RULE}\n\n\
         💼 **Want to see examples?**\nChoose below ⬇️",
        objects = company::OBJECTS,
        clients = company::CLIENTS,
        years = company::YEARS,
        satisfaction = company::SATISFACTION,
    ))
    .with_keyboard(vec![
        vec![
            Button::url("📸 Photos", company::vk_url()),
            Button::url("🎥 Video reviews", company::telegram_url()),
        ],
        back_row(),
    ])
}

pub fn about() -> Reply {
    let features: String = company::FEATURES
        .iter()
        .map(|f| format!("✅ {f}\n"))
        .collect();
    with_main_menu(format!(
        "ℹ️ **ABOUT {}**\n\n{RULE}\n\n{}\n\n\"{}\"\n\n{RULE}\n\n\
         🏙️ **We work in:**\n{}\n\n\
         👷 **A team of professionals:**\nBringing comfort to homes for {}+ years!\n\n{RULE}\n\n\
         ✨ **Why us:**\n{}\n{RULE}\n\n\
         📞 **Contact us:**\n{}\n@{}",
        company::NAME.to_uppercase(),
        company::FULL_NAME,
        company::SLOGAN,
        company::REGION,
        company::YEARS,
        features,
        company::PHONE,
        company::TELEGRAM,
    ))
}

pub fn stats() -> Reply {
    with_main_menu(format!(
        "📊 **OUR NUMBERS**\n\n{RULE}\n\n\
         🏠 Projects completed:\n{}\n\n\
         👥 Happy clients:\n{}\n\n\
         ⏰ Years on the market:\n{}\n\n\
         ⭐ Satisfaction:\n{}\n\n{RULE}\n\n\
         💡 **What it means:**\n\
         • We know our craft\n\
         • Clients trust us\n\
         • Quality is guaranteed\n\
         • Reputation matters\n\n{RULE}\n\n\
         🎁 Choose us, choose quality!",
        company::OBJECTS,
        company::CLIENTS,
        company::YEARS,
        company::SATISFACTION,
    ))
}

pub fn greeting() -> Reply {
    with_main_menu(format!(
        "Hello! Welcome to the {} studio! 🎉\n\nI can tell you about our services and help you get in touch.",
        company::NAME
    ))
}

pub fn services_short() -> Reply {
    let mut reply = services();
    reply.text = "Here is the list of our main services:".to_string();
    reply
}

pub fn fallback() -> Reply {
    with_main_menu("Thank you for your message! Here is the main menu:")
}
