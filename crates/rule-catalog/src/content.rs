//! Finding Content
//!
//! Explanatory and remedial text attached to each rule.

use crate::finding::{Component, FindingTemplate};

pub(crate) static RESERVOIR_CAP: FindingTemplate = FindingTemplate {
    cause: "Reservoir/cap seal deficiency",
    explanation: "With a tired cap or a cracked expansion reservoir the system cannot hold \
        pressure. Coolant boils earlier, the level rises and liquid can be pushed out, which \
        looks like overheating.",
    owner_checklist: &["Look for cracks in the reservoir and for leak marks around the cap \
        after driving with the engine hot."],
    mechanic_checklist: &["Pressure-test the reservoir and cap with a hand pump to confirm the \
        system holds the specified pressure."],
    remedies: &["Replace the reservoir and cap with good quality parts (avoid cheap universal \
        caps)."],
    risk_note: None,
    component: Some(Component::Reservoir),
};

pub(crate) static HOSE_LEAK: FindingTemplate = FindingTemplate {
    cause: "Leaking hoses or clamps",
    explanation: "Dried-out hoses or loose clamps let coolant escape, causing water loss and \
        letting air into the system, which favors overheating.",
    owner_checklist: &["With the engine cold, gently squeeze the main hoses looking for \
        visible cracks or leak marks at the connections."],
    mechanic_checklist: &["Pressurize the system and inspect every hose, connection and clamp, \
        replacing any that show wear."],
    remedies: &["Replace dried-out hoses and damaged clamps, top up with the correct additive \
        and bleed the air out of the system."],
    risk_note: None,
    component: Some(Component::Hoses),
};

pub(crate) static RADIATOR: FindingTemplate = FindingTemplate {
    cause: "Radiator partially or fully obstructed, or leaking",
    explanation: "With a clogged radiator or many bent fins heat exchange suffers, the fan runs \
        longer and temperature tends to climb, especially in traffic.",
    owner_checklist: &["Check whether the radiator has many crushed fins or damp/oxidized \
        areas on its front face."],
    mechanic_checklist: &["Test coolant flow through the radiator and decide between chemical \
        flushing and replacement."],
    remedies: &["Flush and unclog the radiator or replace it, then clean the system and renew \
        the coolant."],
    risk_note: None,
    component: Some(Component::Radiator),
};

pub(crate) static FAN_FAILURE: FindingTemplate = FindingTemplate {
    cause: "Fan, relay or fan switch failure",
    explanation: "If the fan never starts, especially in traffic, the radiator cannot get rid \
        of the heat the engine produces and the engine overheats.",
    owner_checklist: &["Parked safely, let the engine reach working temperature and watch \
        whether the fan switches on at least once or twice."],
    mechanic_checklist: &["Check fuses, relays, wiring, the fan motor and the temperature \
        switch, testing the fan with direct power."],
    remedies: &["Replace the faulty part (fan, relay, fuse or switch) and confirm the fan \
        engages at the specified temperature."],
    risk_note: None,
    component: Some(Component::Fan),
};

pub(crate) static FAN_EXCESSIVE: FindingTemplate = FindingTemplate {
    cause: "Fan engaging excessively (possible temperature sensor or injection strategy fault)",
    explanation: "When the fan stays on almost all the time the temperature sensor may be \
        faulty, the wiring may have a poor contact, or the ECU may be compensating for a wrong \
        reading.",
    owner_checklist: &[],
    mechanic_checklist: &["Read live data with a scan tool, compare the real temperature with \
        the one reported by the ECU and test the engine temperature sensor."],
    remedies: &["Fix the temperature sensor or wiring fault and, if needed, update the \
        injection parameters with the scan tool."],
    risk_note: None,
    component: Some(Component::Sensor),
};

pub(crate) static THERMOSTAT_STUCK_OPEN: FindingTemplate = FindingTemplate {
    cause: "Thermostat stuck open or removed",
    explanation: "With the thermostat stuck open or removed the engine takes very long to reach \
        its ideal temperature and may run outside the correct range, hurting consumption and \
        wear.",
    owner_checklist: &["Notice whether the needle takes too long to reach the normal range in \
        light use, especially on cold days."],
    mechanic_checklist: &["Remove the thermostat, test its opening in a hot water bath and \
        replace it if it is stuck."],
    remedies: &["Fit a new thermostat of the correct rating for the model so it opens at the \
        specified temperature."],
    risk_note: None,
    component: Some(Component::Thermostat),
};

pub(crate) static THERMOSTAT_STUCK_CLOSED: FindingTemplate = FindingTemplate {
    cause: "Thermostat stuck closed or opening late",
    explanation: "If the thermostat does not open at the right temperature flow to the \
        radiator is restricted and temperature climbs quickly, especially under load or on \
        the highway.",
    owner_checklist: &[],
    mechanic_checklist: &["Test the thermostat out of the engine, checking opening temperature \
        and full travel."],
    remedies: &["Replace the thermostat with a new, reputable part and renew the coolant after \
        the job."],
    risk_note: None,
    component: Some(Component::Thermostat),
};

pub(crate) static TEMPERATURE_SENSOR: FindingTemplate = FindingTemplate {
    cause: "Engine temperature sensor or dashboard gauge reading incorrectly",
    explanation: "When the sensor sends wrong signals the ECU may enrich the mixture, switch \
        the fan at the wrong time or light the temperature warning without real overheating.",
    owner_checklist: &[],
    mechanic_checklist: &["Compare the real engine temperature (infrared thermometer or OBD) \
        with the dashboard and the ECU reading on a scan tool."],
    remedies: &["Replace the faulty temperature sensor, repair the wiring or cluster, and clear \
        fault codes after the repair."],
    risk_note: None,
    component: Some(Component::Sensor),
};

pub(crate) static WATER_PUMP: FindingTemplate = FindingTemplate {
    cause: "Water pump leaking, with bearing play or damaged impeller",
    explanation: "A worn water pump reduces or stops coolant circulation, so the engine heats \
        up quickly while the radiator stays relatively cold.",
    owner_checklist: &["Listen for abnormal noise around the belt and look for coolant leaking \
        at the front of the engine."],
    mechanic_checklist: &["Inspect the pump, check shaft play and the weep hole for leaks, and \
        remove it for analysis if needed."],
    remedies: &["Replace the water pump (ideally with belt and tensioners where applicable) and \
        refill with the correct additive."],
    risk_note: None,
    component: Some(Component::WaterPump),
};

pub(crate) static TRAPPED_AIR: FindingTemplate = FindingTemplate {
    cause: "Excess air trapped in the cooling system",
    explanation: "Air pockets prevent even coolant circulation, causing hot spots, bubbling \
        noises and temperature swings.",
    owner_checklist: &["Check whether the level drops after driving and whether water can be \
        heard circulating behind the dashboard."],
    mechanic_checklist: &["Perform a full bleeding procedure using the model's bleed points, \
        with the car on a ramp if needed."],
    remedies: &["Bleed the system properly after fixing leaks so only coolant, not air, fills \
        the engine passages."],
    risk_note: None,
    component: None,
};

pub(crate) static HEAD_GASKET: FindingTemplate = FindingTemplate {
    cause: "Possible blown head gasket or internal cracks",
    explanation: "When the head gasket fails, combustion pressure leaks into the cooling system \
        or oil and coolant mix. This causes water loss, overheating, constant white smoke and \
        contamination of the oil or coolant.",
    owner_checklist: &["Look for 'mayonnaise' (light cream) under the oil filler cap or on the \
        dipstick, and check whether the reservoir level drops without any external leak."],
    mechanic_checklist: &["Pressure-test the system, test the coolant for CO₂ and run a \
        compression/leak-down test on the cylinders."],
    remedies: &["If confirmed, remove the cylinder head, have it machined (flatness, crack \
        test, valve seals) and replace the gasket, head bolts and system seals."],
    risk_note: Some(
        "Driving with a blown head gasket can cause severe overheating, permanent cylinder head \
        warping, engine seizure and serious oil contamination.",
    ),
    component: Some(Component::HeadGasket),
};

pub(crate) static HEATER_CORE: FindingTemplate = FindingTemplate {
    cause: "Heater core leaking into the cabin",
    explanation: "When the heater core is punctured coolant escapes into the cabin, leaving the \
        carpet damp with a sweet smell.",
    owner_checklist: &["Check for heavy windshield fogging with a sweet smell and a constantly \
        damp carpet, especially on the passenger side."],
    mechanic_checklist: &["Isolate the heater circuit, test the heater core and replace it if \
        it leaks."],
    remedies: &["Replace the faulty heater core, top up with the proper additive and bleed the \
        system after the repair."],
    risk_note: None,
    component: None,
};

pub(crate) static GENERAL_EVALUATION: FindingTemplate = FindingTemplate {
    cause: "General cooling system evaluation needed",
    explanation: "The information given does not point to a single component. Wear at more \
        than one point of the system is likely.",
    owner_checklist: &[],
    mechanic_checklist: &["Check system pressure, radiator condition, fan operation, \
        thermostat, water pump, reservoir cap and possible internal leaks."],
    remedies: &["Run a complete cooling system diagnosis, fixing every leak or restriction, \
        then clean the system and renew all the coolant."],
    risk_note: None,
    component: None,
};
