use super::EmojiCatalog;

// Compact starter set covering the common picker categories. Hosts with
// bigger needs pass their own catalog at construction time.
const BUILTIN: &[(&str, &str)] = &[
    // Smileys
    ("grinning_face", "😀"),
    ("beaming_face", "😁"),
    ("face_with_tears_of_joy", "😂"),
    ("rolling_on_the_floor_laughing", "🤣"),
    ("slightly_smiling_face", "🙂"),
    ("upside_down_face", "🙃"),
    ("winking_face", "😉"),
    ("smiling_face_with_hearts", "🥰"),
    ("smiling_face_with_heart_eyes", "😍"),
    ("star_struck", "🤩"),
    ("face_blowing_a_kiss", "😘"),
    ("face_savoring_food", "😋"),
    ("face_with_tongue", "😛"),
    ("zany_face", "🤪"),
    ("thinking_face", "🤔"),
    ("face_with_raised_eyebrow", "🤨"),
    ("neutral_face", "😐"),
    ("smirking_face", "😏"),
    ("relieved_face", "😌"),
    ("pensive_face", "😔"),
    ("sleeping_face", "😴"),
    ("face_with_medical_mask", "😷"),
    ("cold_face", "🥶"),
    ("hot_face", "🥵"),
    ("partying_face", "🥳"),
    ("smiling_face_with_sunglasses", "😎"),
    ("nerd_face", "🤓"),
    ("confused_face", "😕"),
    ("worried_face", "😟"),
    ("crying_face", "😢"),
    ("loudly_crying_face", "😭"),
    ("face_screaming_in_fear", "😱"),
    ("angry_face", "😠"),
    ("pouting_face", "😡"),
    ("ghost", "👻"),
    ("alien", "👽"),
    ("robot", "🤖"),
    ("smiling_cat", "😺"),
    // Gestures and people
    ("waving_hand", "👋"),
    ("raised_hand", "✋"),
    ("ok_hand", "👌"),
    ("victory_hand", "✌️"),
    ("crossed_fingers", "🤞"),
    ("thumbs_up", "👍"),
    ("thumbs_down", "👎"),
    ("clapping_hands", "👏"),
    ("raising_hands", "🙌"),
    ("folded_hands", "🙏"),
    ("handshake", "🤝"),
    ("flexed_biceps", "💪"),
    ("writing_hand", "✍️"),
    ("eyes", "👀"),
    ("brain", "🧠"),
    ("person_shrugging", "🤷"),
    ("person_facepalming", "🤦"),
    // Animals and nature
    ("dog_face", "🐶"),
    ("cat_face", "🐱"),
    ("mouse_face", "🐭"),
    ("rabbit_face", "🐰"),
    ("fox", "🦊"),
    ("bear", "🐻"),
    ("panda", "🐼"),
    ("koala", "🐨"),
    ("tiger_face", "🐯"),
    ("lion", "🦁"),
    ("cow_face", "🐮"),
    ("pig_face", "🐷"),
    ("frog", "🐸"),
    ("monkey_face", "🐵"),
    ("penguin", "🐧"),
    ("bird", "🐦"),
    ("owl", "🦉"),
    ("butterfly", "🦋"),
    ("snail", "🐌"),
    ("honeybee", "🐝"),
    ("turtle", "🐢"),
    ("octopus", "🐙"),
    ("whale", "🐳"),
    ("dolphin", "🐬"),
    ("zebra", "🦓"),
    ("unicorn", "🦄"),
    ("cactus", "🌵"),
    ("evergreen_tree", "🌲"),
    ("four_leaf_clover", "🍀"),
    ("maple_leaf", "🍁"),
    ("mushroom", "🍄"),
    ("sunflower", "🌻"),
    ("rose", "🌹"),
    ("full_moon", "🌕"),
    ("crescent_moon", "🌙"),
    ("star", "⭐"),
    ("glowing_star", "🌟"),
    ("sun", "☀️"),
    ("cloud", "☁️"),
    ("rainbow", "🌈"),
    ("snowflake", "❄️"),
    ("high_voltage", "⚡"),
    ("fire", "🔥"),
    ("droplet", "💧"),
    ("water_wave", "🌊"),
    // Food and drink
    ("red_apple", "🍎"),
    ("banana", "🍌"),
    ("grapes", "🍇"),
    ("strawberry", "🍓"),
    ("watermelon", "🍉"),
    ("lemon", "🍋"),
    ("mango", "🥭"),
    ("avocado", "🥑"),
    ("broccoli", "🥦"),
    ("hot_pepper", "🌶️"),
    ("bread", "🍞"),
    ("cheese_wedge", "🧀"),
    ("hamburger", "🍔"),
    ("french_fries", "🍟"),
    ("pizza", "🍕"),
    ("taco", "🌮"),
    ("sushi", "🍣"),
    ("ramen", "🍜"),
    ("birthday_cake", "🎂"),
    ("doughnut", "🍩"),
    ("cookie", "🍪"),
    ("chocolate_bar", "🍫"),
    ("popcorn", "🍿"),
    ("hot_beverage", "☕"),
    ("beer_mug", "🍺"),
    // Travel and places
    ("rocket", "🚀"),
    ("airplane", "✈️"),
    ("automobile", "🚗"),
    ("fire_truck", "🚒"),
    ("police_car", "🚓"),
    ("ambulance", "🚑"),
    ("bicycle", "🚲"),
    ("locomotive", "🚂"),
    ("ship", "🚢"),
    ("sailboat", "⛵"),
    ("anchor", "⚓"),
    ("house", "🏠"),
    ("office_building", "🏢"),
    ("castle", "🏰"),
    ("tent", "⛺"),
    ("mount_fuji", "🗻"),
    ("desert_island", "🏝️"),
    ("globe_showing_americas", "🌎"),
    // Activities and objects
    ("soccer_ball", "⚽"),
    ("basketball", "🏀"),
    ("trophy", "🏆"),
    ("video_game", "🎮"),
    ("game_die", "🎲"),
    ("jigsaw", "🧩"),
    ("artist_palette", "🎨"),
    ("musical_note", "🎵"),
    ("guitar", "🎸"),
    ("headphone", "🎧"),
    ("microphone", "🎤"),
    ("camera", "📷"),
    ("laptop", "💻"),
    ("keyboard", "⌨️"),
    ("mobile_phone", "📱"),
    ("telephone", "☎️"),
    ("light_bulb", "💡"),
    ("flashlight", "🔦"),
    ("battery", "🔋"),
    ("magnifying_glass", "🔍"),
    ("locked", "🔒"),
    ("key", "🔑"),
    ("hammer", "🔨"),
    ("wrench", "🔧"),
    ("gear", "⚙️"),
    ("scissors", "✂️"),
    ("pencil", "✏️"),
    ("books", "📚"),
    ("open_book", "📖"),
    ("memo", "📝"),
    ("calendar", "📅"),
    ("pushpin", "📌"),
    ("paperclip", "📎"),
    ("package", "📦"),
    ("envelope", "✉️"),
    ("hourglass", "⌛"),
    ("alarm_clock", "⏰"),
    ("balloon", "🎈"),
    ("party_popper", "🎉"),
    ("wrapped_gift", "🎁"),
    ("gem_stone", "💎"),
    ("money_bag", "💰"),
    // Symbols
    ("red_heart", "❤️"),
    ("orange_heart", "🧡"),
    ("yellow_heart", "💛"),
    ("green_heart", "💚"),
    ("blue_heart", "💙"),
    ("purple_heart", "💜"),
    ("broken_heart", "💔"),
    ("sparkles", "✨"),
    ("hundred_points", "💯"),
    ("check_mark", "✅"),
    ("cross_mark", "❌"),
    ("warning", "⚠️"),
    ("question_mark", "❓"),
    ("exclamation_mark", "❗"),
    ("plus", "➕"),
    ("minus", "➖"),
    ("recycling", "♻️"),
    ("infinity", "♾️"),
];

/// Catalog used when a host registers the picker without supplying one.
#[must_use]
pub fn builtin() -> EmojiCatalog {
    BUILTIN.iter().copied().collect()
}
