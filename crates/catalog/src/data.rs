//! The catalog shipped with the application.

use common::Price;

use crate::records::{Product, Service, Store};

pub const PRODUCT_CATEGORIES: [&str; 8] = [
    "Brake Systems",
    "Engine Parts",
    "Filters",
    "Lighting",
    "Oil & Fluids",
    "Suspension",
    "Tires & Wheels",
    "Electronic Systems",
];

pub const SERVICE_CATEGORIES: [&str; 8] = [
    "General Maintenance",
    "Repairs",
    "Diagnostics",
    "Cleaning",
    "Tire Services",
    "Oil Change",
    "Battery Services",
    "AC Services",
];

pub static PRODUCTS: [Product; 8] = [
    Product {
        id: "p1",
        name: "Premium Brake Pads",
        category: "Brake Systems",
        description: "High-quality ceramic brake pads for improved stopping power and reduced noise. Compatible with most sedan models.",
        price: Price::new(4500),
        rating: 4.7,
        store: "AutoParts Algiers",
        store_id: "s1",
        location: "Algiers",
        image: "https://images.pexels.com/photos/3806252/pexels-photo-3806252.jpeg",
    },
    Product {
        id: "p2",
        name: "Synthetic Engine Oil",
        category: "Oil & Fluids",
        description: "Full synthetic 5W-30 engine oil for superior engine protection and performance in all weather conditions.",
        price: Price::new(2800),
        rating: 4.9,
        store: "LubriTech",
        store_id: "s2",
        location: "Oran",
        image: "https://images.pexels.com/photos/2244746/pexels-photo-2244746.jpeg",
    },
    Product {
        id: "p3",
        name: "Air Filter",
        category: "Filters",
        description: "High-flow air filter for increased engine efficiency and better fuel economy.",
        price: Price::new(1200),
        rating: 4.5,
        store: "FilterPro Blida",
        store_id: "s3",
        location: "Blida",
        image: "https://images.pexels.com/photos/8844392/pexels-photo-8844392.jpeg",
    },
    Product {
        id: "p4",
        name: "LED Headlights",
        category: "Lighting",
        description: "Bright LED headlight set with long lifespan and improved visibility for night driving.",
        price: Price::new(5600),
        rating: 4.6,
        store: "AutoParts Algiers",
        store_id: "s1",
        location: "Algiers",
        image: "https://images.pexels.com/photos/210019/pexels-photo-210019.jpeg",
    },
    Product {
        id: "p5",
        name: "Shock Absorbers",
        category: "Suspension",
        description: "Heavy-duty shock absorbers for a smoother ride on rough roads.",
        price: Price::new(6200),
        rating: 4.4,
        store: "SuspensionMaster",
        store_id: "s4",
        location: "Constantine",
        image: "https://images.pexels.com/photos/3807081/pexels-photo-3807081.jpeg",
    },
    Product {
        id: "p6",
        name: "All-Season Tires",
        category: "Tires & Wheels",
        description: "Premium all-season tires with excellent grip on both wet and dry surfaces.",
        price: Price::new(8500),
        rating: 4.8,
        store: "TirePro Annaba",
        store_id: "s5",
        location: "Annaba",
        image: "https://images.pexels.com/photos/244553/pexels-photo-244553.jpeg",
    },
    Product {
        id: "p7",
        name: "Car Battery",
        category: "Electronic Systems",
        description: "Maintenance-free 60Ah battery with 3-year warranty for reliable starting power.",
        price: Price::new(7800),
        rating: 4.7,
        store: "ElectroCar",
        store_id: "s6",
        location: "Sétif",
        image: "https://images.pexels.com/photos/1119023/pexels-photo-1119023.jpeg",
    },
    Product {
        id: "p8",
        name: "Spark Plugs Set",
        category: "Engine Parts",
        description: "Set of 4 high-performance iridium spark plugs for improved ignition and fuel efficiency.",
        price: Price::new(3200),
        rating: 4.6,
        store: "AutoParts Algiers",
        store_id: "s1",
        location: "Algiers",
        image: "https://images.pexels.com/photos/162553/keys-workshop-mechanic-tools-162553.jpeg",
    },
];

pub static SERVICES: [Service; 8] = [
    Service {
        id: "s1",
        name: "Standard Car Wash",
        category: "Cleaning",
        description: "Complete exterior wash, tire cleaning, and interior vacuuming to keep your car looking its best.",
        price: Price::new(1500),
        rating: 4.5,
        provider: "SparkleWash",
        provider_id: "s7",
        location: "Algiers",
        image: "https://images.pexels.com/photos/1669799/pexels-photo-1669799.jpeg",
        duration: "30 minutes",
    },
    Service {
        id: "s2",
        name: "Oil Change Service",
        category: "Oil Change",
        description: "Professional oil change service including new oil filter and disposal of old oil.",
        price: Price::new(3500),
        rating: 4.8,
        provider: "QuickService Garage",
        provider_id: "s8",
        location: "Oran",
        image: "https://images.pexels.com/photos/3807248/pexels-photo-3807248.jpeg",
        duration: "45 minutes",
    },
    Service {
        id: "s3",
        name: "Tire Rotation",
        category: "Tire Services",
        description: "Professional tire rotation service to ensure even tire wear and extend tire life.",
        price: Price::new(2000),
        rating: 4.6,
        provider: "TirePro Annaba",
        provider_id: "s5",
        location: "Annaba",
        image: "https://images.pexels.com/photos/4489749/pexels-photo-4489749.jpeg",
        duration: "40 minutes",
    },
    Service {
        id: "s4",
        name: "Engine Diagnostics",
        category: "Diagnostics",
        description: "Comprehensive engine diagnostic scan to identify and troubleshoot issues.",
        price: Price::new(2500),
        rating: 4.9,
        provider: "DiagTech Auto",
        provider_id: "s9",
        location: "Constantine",
        image: "https://images.pexels.com/photos/3642618/pexels-photo-3642618.jpeg",
        duration: "60 minutes",
    },
    Service {
        id: "s5",
        name: "Brake System Check",
        category: "Diagnostics",
        description: "Complete brake system inspection including pads, rotors, and fluid level check.",
        price: Price::new(1800),
        rating: 4.7,
        provider: "BrakeMaster",
        provider_id: "s10",
        location: "Blida",
        image: "https://images.pexels.com/photos/3814310/pexels-photo-3814310.jpeg",
        duration: "50 minutes",
    },
    Service {
        id: "s6",
        name: "AC System Service",
        category: "AC Services",
        description: "Air conditioning system check and recharge for optimal cooling performance.",
        price: Price::new(4200),
        rating: 4.5,
        provider: "CoolAir Services",
        provider_id: "s11",
        location: "Sétif",
        image: "https://images.pexels.com/photos/2784824/pexels-photo-2784824.jpeg",
        duration: "75 minutes",
    },
    Service {
        id: "s7",
        name: "Battery Replacement",
        category: "Battery Services",
        description: "Professional battery replacement service including disposal of old battery.",
        price: Price::new(8500),
        rating: 4.8,
        provider: "ElectroCar",
        provider_id: "s6",
        location: "Sétif",
        image: "https://images.pexels.com/photos/97075/pexels-photo-97075.jpeg",
        duration: "30 minutes",
    },
    Service {
        id: "s8",
        name: "Full Vehicle Inspection",
        category: "General Maintenance",
        description: "Comprehensive vehicle inspection covering all major systems for safety and reliability.",
        price: Price::new(5000),
        rating: 4.9,
        provider: "QuickService Garage",
        provider_id: "s8",
        location: "Oran",
        image: "https://images.pexels.com/photos/3807329/pexels-photo-3807329.jpeg",
        duration: "90 minutes",
    },
];

pub static STORES: [Store; 6] = [
    Store {
        id: "s1",
        name: "AutoParts Algiers",
        description: "A comprehensive auto parts store carrying everything from brake parts to engine components.",
        rating: 4.7,
        location: "Algiers",
        address: "123 Didouche Mourad, Algiers",
        phone: "+213 21 234 567",
        image: "https://images.pexels.com/photos/2659941/pexels-photo-2659941.jpeg",
        categories: &["Brake Systems", "Engine Parts", "Lighting", "Filters"],
    },
    Store {
        id: "s2",
        name: "LubriTech",
        description: "Specialists in automotive oils, lubricants, and fluids for all vehicle types.",
        rating: 4.9,
        location: "Oran",
        address: "45 Boulevard Millinium, Oran",
        phone: "+213 41 345 678",
        image: "https://images.pexels.com/photos/4436362/pexels-photo-4436362.jpeg",
        categories: &["Oil & Fluids"],
    },
    Store {
        id: "s3",
        name: "FilterPro Blida",
        description: "Expert provider of high-quality filters for all automotive applications.",
        rating: 4.5,
        location: "Blida",
        address: "78 Rue de la Liberté, Blida",
        phone: "+213 25 456 789",
        image: "https://images.pexels.com/photos/15764332/pexels-photo-15764332/free-photo-of-workshop-with-shelves-full-of-details.jpeg",
        categories: &["Filters", "Engine Parts"],
    },
    Store {
        id: "s4",
        name: "SuspensionMaster",
        description: "Specializing in suspension components and services for a smoother ride.",
        rating: 4.4,
        location: "Constantine",
        address: "32 Avenue Ben Badis, Constantine",
        phone: "+213 31 567 890",
        image: "https://images.pexels.com/photos/6767702/pexels-photo-6767702.jpeg",
        categories: &["Suspension", "Tires & Wheels"],
    },
    Store {
        id: "s5",
        name: "TirePro Annaba",
        description: "Premier tire shop with a wide selection of tires and wheel-related services.",
        rating: 4.8,
        location: "Annaba",
        address: "15 Boulevard du Révolution, Annaba",
        phone: "+213 38 678 901",
        image: "https://images.pexels.com/photos/5639837/pexels-photo-5639837.jpeg",
        categories: &["Tires & Wheels", "Tire Services"],
    },
    Store {
        id: "s6",
        name: "ElectroCar",
        description: "Specialists in automotive electrical systems and batteries.",
        rating: 4.7,
        location: "Sétif",
        address: "67 Rue des Frères Saadane, Sétif",
        phone: "+213 36 789 012",
        image: "https://images.pexels.com/photos/3847366/pexels-photo-3847366.jpeg",
        categories: &["Electronic Systems", "Battery Services"],
    },
];
