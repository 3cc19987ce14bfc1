//! The built-in hero records.
//!
//! Five pages of five heroes, in the order the API serves them. The image
//! files live under the gateway's images directory.

use crate::hero::Hero;
use crate::id::HeroId;

struct Entry {
    name: &'static str,
    image: &'static str,
    about: &'static str,
    rating: f64,
    power: u32,
    month: &'static str,
    day: &'static str,
    family: &'static [&'static str],
    abilities: &'static [&'static str],
    nature_types: &'static [&'static str],
}

const ENTRIES: [Entry; 25] = [
    // Page 1
    Entry {
        name: "Sasuke",
        image: "/images/sasuke.jpg",
        about: "Last surviving member of the Uchiha clan, he travels the world to investigate threats to the Hidden Leaf.",
        rating: 5.0,
        power: 98,
        month: "July",
        day: "23rd",
        family: &["Fugaku", "Mikoto", "Itachi", "Sarada", "Sakura"],
        abilities: &["Sharingan", "Rinnegan", "Sussano", "Amateratsu", "Intelligence"],
        nature_types: &["Lightning", "Fire", "Wind", "Earth", "Water"],
    },
    Entry {
        name: "Naruto",
        image: "/images/naruto.jpg",
        about: "The Seventh Hokage, host of the Nine-Tails and a ninja who never goes back on his word.",
        rating: 5.0,
        power: 98,
        month: "Oct",
        day: "10th",
        family: &["Minato", "Kushina", "Boruto", "Himawari", "Hinata"],
        abilities: &["Rasengan", "Rasen-Shuriken", "Shadow Clone", "Senin Mode"],
        nature_types: &["Wind", "Earth", "Lava", "Fire"],
    },
    Entry {
        name: "Sakura",
        image: "/images/sakura.jpg",
        about: "A medical-nin of the Hidden Leaf whose chakra control and strength are unmatched.",
        rating: 4.5,
        power: 92,
        month: "Mar",
        day: "28th",
        family: &["Kizashi", "Mebuki", "Sarada", "Sasuke"],
        abilities: &["Chakra Control", "Medical Ninjutsu", "Strength", "Intelligence"],
        nature_types: &["Earth", "Water", "Fire"],
    },
    Entry {
        name: "Boruto",
        image: "/images/boruto.jpg",
        about: "Son of the Seventh Hokage who chose the path of a wandering ninja under Sasuke.",
        rating: 4.9,
        power: 95,
        month: "Mar",
        day: "27th",
        family: &["Naruto", "Hinata", "Himawari"],
        abilities: &["Karma", "Jogan", "Rasengan", "Intelligence"],
        nature_types: &["Lightning", "Wind", "Water"],
    },
    Entry {
        name: "Sarada",
        image: "/images/sarada.jpg",
        about: "An Uchiha of the new generation whose dream is to become Hokage.",
        rating: 4.9,
        power: 95,
        month: "Mar",
        day: "31st",
        family: &["Sasuke", "Sakura"],
        abilities: &["Sharingan", "Strength", "Intelligence"],
        nature_types: &["Lightning", "Fire"],
    },
    // Page 2
    Entry {
        name: "Mitsuki",
        image: "/images/mitsuki.jpg",
        about: "A synthetic human created by Orochimaru who came to the Leaf to find his own sun.",
        rating: 4.8,
        power: 90,
        month: "Jul",
        day: "25th",
        family: &["Orochimaru"],
        abilities: &["Sage Mode", "Snake Transformation", "Intelligence"],
        nature_types: &["Lightning", "Wind"],
    },
    Entry {
        name: "Kawaki",
        image: "/images/kawaki.jpg",
        about: "A former vessel of Kara raised in Naruto's household, bearer of a Karma seal.",
        rating: 4.2,
        power: 92,
        month: "Jan",
        day: "1st",
        family: &["Kokatsu"],
        abilities: &["Karma", "Shape Transformation", "Strength"],
        nature_types: &["Fire"],
    },
    Entry {
        name: "Orochimaru",
        image: "/images/orochimaru.jpg",
        about: "One of the Legendary Sannin, a researcher obsessed with immortality.",
        rating: 4.5,
        power: 97,
        month: "Oct",
        day: "27th",
        family: &["Mitsuki"],
        abilities: &["Immortality", "Snake Transformation", "Intelligence"],
        nature_types: &["Lightning", "Wind", "Fire", "Earth", "Water"],
    },
    Entry {
        name: "Kakashi",
        image: "/images/kakashi.jpg",
        about: "The Copy Ninja and Sixth Hokage, known for mastering over a thousand jutsu.",
        rating: 4.6,
        power: 96,
        month: "Sep",
        day: "15th",
        family: &["Sakumo"],
        abilities: &["Sharingan", "Lightning Blade", "Intelligence"],
        nature_types: &["Lightning", "Water", "Fire", "Earth", "Wind"],
    },
    Entry {
        name: "Jiraiya",
        image: "/images/jiraiya.jpg",
        about: "A Legendary Sannin, toad sage, and teacher of two Hokage.",
        rating: 4.7,
        power: 95,
        month: "Nov",
        day: "11th",
        family: &[],
        abilities: &["Sage Mode", "Rasengan", "Toad Summoning"],
        nature_types: &["Fire", "Earth", "Wind", "Water"],
    },
    // Page 3
    Entry {
        name: "Hinata",
        image: "/images/hinata.jpg",
        about: "A gentle Hyuga heiress whose Byakugan and quiet resolve never waver.",
        rating: 4.6,
        power: 88,
        month: "Dec",
        day: "27th",
        family: &["Hiashi", "Hanabi", "Naruto", "Boruto", "Himawari"],
        abilities: &["Byakugan", "Gentle Fist", "Twin Lion Fists"],
        nature_types: &["Fire", "Lightning"],
    },
    Entry {
        name: "Himawari",
        image: "/images/himawari.jpg",
        about: "Naruto's daughter, who awakened the Byakugan at a young age.",
        rating: 4.1,
        power: 70,
        month: "Apr",
        day: "1st",
        family: &["Naruto", "Hinata", "Boruto"],
        abilities: &["Byakugan", "Gentle Fist"],
        nature_types: &["Wind"],
    },
    Entry {
        name: "Shikamaru",
        image: "/images/shikamaru.jpg",
        about: "The Hokage's chief advisor and a strategist with an IQ over 200.",
        rating: 4.4,
        power: 84,
        month: "Sep",
        day: "22nd",
        family: &["Shikaku", "Yoshino", "Temari", "Shikadai"],
        abilities: &["Shadow Possession", "Intelligence"],
        nature_types: &["Fire", "Earth"],
    },
    Entry {
        name: "Temari",
        image: "/images/temari.jpg",
        about: "A wind-style master from the Hidden Sand who married into the Nara clan.",
        rating: 4.2,
        power: 82,
        month: "Aug",
        day: "23rd",
        family: &["Gaara", "Kankuro", "Shikamaru", "Shikadai"],
        abilities: &["Giant Fan", "Wind Scythe"],
        nature_types: &["Wind"],
    },
    Entry {
        name: "Gaara",
        image: "/images/gaara.jpg",
        about: "Kazekage of the Hidden Sand and former host of the One-Tail.",
        rating: 4.7,
        power: 91,
        month: "Jan",
        day: "19th",
        family: &["Rasa", "Karura", "Temari", "Kankuro"],
        abilities: &["Sand Manipulation", "Absolute Defense"],
        nature_types: &["Wind", "Earth"],
    },
    // Page 4
    Entry {
        name: "Itachi",
        image: "/images/itachi.jpg",
        about: "A prodigy of the Uchiha clan who carried the village's darkest secret.",
        rating: 4.9,
        power: 96,
        month: "Jun",
        day: "9th",
        family: &["Fugaku", "Mikoto", "Sasuke"],
        abilities: &["Sharingan", "Tsukuyomi", "Amateratsu", "Sussano"],
        nature_types: &["Fire", "Water", "Wind"],
    },
    Entry {
        name: "Madara",
        image: "/images/madara.jpg",
        about: "Co-founder of the Hidden Leaf who later sought to cast the Infinite Tsukuyomi.",
        rating: 4.8,
        power: 99,
        month: "Dec",
        day: "24th",
        family: &["Tajima", "Izuna"],
        abilities: &["Rinnegan", "Sussano", "Wood Release"],
        nature_types: &["Fire", "Wind", "Lightning", "Earth", "Water"],
    },
    Entry {
        name: "Minato",
        image: "/images/minato.jpg",
        about: "The Fourth Hokage, called the Yellow Flash for his teleportation technique.",
        rating: 4.8,
        power: 95,
        month: "Jan",
        day: "25th",
        family: &["Kushina", "Naruto"],
        abilities: &["Flying Thunder God", "Rasengan"],
        nature_types: &["Lightning", "Wind", "Fire"],
    },
    Entry {
        name: "Kushina",
        image: "/images/kushina.jpg",
        about: "A fiery Uzumaki and former host of the Nine-Tails.",
        rating: 4.3,
        power: 85,
        month: "Jul",
        day: "10th",
        family: &["Minato", "Naruto"],
        abilities: &["Chakra Chains", "Sealing Jutsu"],
        nature_types: &["Wind", "Water"],
    },
    Entry {
        name: "Tsunade",
        image: "/images/tsunade.jpg",
        about: "The Fifth Hokage, a Legendary Sannin and the greatest medical-nin alive.",
        rating: 4.6,
        power: 93,
        month: "Aug",
        day: "2nd",
        family: &["Hashirama", "Nawaki"],
        abilities: &["Strength", "Medical Ninjutsu", "Creation Rebirth"],
        nature_types: &["Earth", "Water", "Fire", "Lightning"],
    },
    // Page 5
    Entry {
        name: "Rock Lee",
        image: "/images/rock_lee.jpg",
        about: "A taijutsu specialist who proved hard work can rival genius.",
        rating: 4.5,
        power: 86,
        month: "Nov",
        day: "27th",
        family: &["Metal Lee"],
        abilities: &["Eight Gates", "Drunken Fist", "Strength"],
        nature_types: &[],
    },
    Entry {
        name: "Neji",
        image: "/images/neji.jpg",
        about: "A Hyuga prodigy from the branch house who mastered the Rotation.",
        rating: 4.5,
        power: 87,
        month: "Jul",
        day: "3rd",
        family: &["Hizashi", "Hinata", "Hanabi"],
        abilities: &["Byakugan", "Rotation", "Gentle Fist"],
        nature_types: &["Fire", "Earth", "Water"],
    },
    Entry {
        name: "Shino",
        image: "/images/shino.jpg",
        about: "An Aburame who fights with the insects living inside his body.",
        rating: 4.0,
        power: 78,
        month: "Jan",
        day: "23rd",
        family: &["Shibi"],
        abilities: &["Insect Jar", "Insect Clone"],
        nature_types: &["Fire", "Earth"],
    },
    Entry {
        name: "Konohamaru",
        image: "/images/konohamaru.jpg",
        about: "Grandson of the Third Hokage and sensei of Team 7's new generation.",
        rating: 4.3,
        power: 84,
        month: "Dec",
        day: "30th",
        family: &["Hiruzen", "Asuma"],
        abilities: &["Rasengan", "Shadow Clone"],
        nature_types: &["Fire", "Wind"],
    },
    Entry {
        name: "Ino",
        image: "/images/ino.jpg",
        about: "A sensor-nin of the Yamanaka clan who leads the Barrier Team.",
        rating: 4.1,
        power: 80,
        month: "Sep",
        day: "23rd",
        family: &["Inoichi", "Sai", "Inojin"],
        abilities: &["Mind Transfer", "Medical Ninjutsu", "Sensing"],
        nature_types: &["Earth", "Water", "Fire"],
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|&s| s.to_owned()).collect()
}

/// Returns the built-in heroes in catalog order, with ids starting at 1.
#[must_use]
pub fn heroes() -> Vec<Hero> {
    ENTRIES
        .iter()
        .zip(1..)
        .map(|(entry, id)| Hero {
            id: HeroId::new(id),
            name: entry.name.to_owned(),
            image: entry.image.to_owned(),
            about: entry.about.to_owned(),
            rating: entry.rating,
            power: entry.power,
            month: entry.month.to_owned(),
            day: entry.day.to_owned(),
            family: owned(entry.family),
            abilities: owned(entry.abilities),
            nature_types: owned(entry.nature_types),
        })
        .collect()
}
