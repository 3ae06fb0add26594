//! The fixed cybersecurity question bank.

mod question;

pub use question::*;

/// The ten questions every quiz draws from, in authoring order.
pub fn question_bank() -> Vec<Question> {
    vec![
        Question::multiple_choice(
            "What is phishing?",
            [
                "A) A type of online game",
                "B) An attempt to trick you into revealing personal information",
                "C) A fishing technique",
                "D) A secure way to browse the internet",
            ],
            "B) An attempt to trick you into revealing personal information",
            "Phishing is a deceptive attempt to acquire sensitive information such as usernames, passwords, and credit card details, often for malicious reasons, by masquerading as a trustworthy entity in an electronic communication.",
        ),
        Question::multiple_choice(
            "Which of the following is an example of a strong password?",
            [
                "A) Password123",
                "B) 12345678",
                "C) MyDogName",
                "D) L@rgeP@$$w0rd!",
            ],
            "D) L@rgeP@$$w0rd!",
            "A strong password combines uppercase and lowercase letters, numbers, and symbols, and is generally long (12+ characters).",
        ),
        Question::boolean(
            "True or False: It is safe to click on links from unknown senders if they look interesting.",
            false,
            "False. Clicking on links from unknown senders can lead to malware infections or phishing sites. Always verify the sender before clicking.",
        ),
        Question::multiple_choice(
            "What does '2FA' stand for in cybersecurity?",
            [
                "A) Two-Factor Authentication",
                "B) Two-Function Access",
                "C) Double File Access",
                "D) Second Firewall Activation",
            ],
            "A) Two-Factor Authentication",
            "2FA adds an extra layer of security by requiring two different methods of authentication before granting access.",
        ),
        Question::multiple_choice(
            "What is malware?",
            [
                "A) Software used for email management",
                "B) Malicious software designed to damage or disable computer systems",
                "C) A tool for website development",
                "D) A type of computer hardware",
            ],
            "B) Malicious software designed to damage or disable computer systems",
            "Malware is a general term for malicious software like viruses, worms, and ransomware, designed to harm or exploit computer systems.",
        ),
        Question::boolean(
            "True or False: Using public Wi-Fi without a VPN is always safe for sensitive activities like online banking.",
            false,
            "False. Public Wi-Fi networks are often unsecured, making your data vulnerable to interception. A VPN encrypts your traffic and provides protection.",
        ),
        Question::multiple_choice(
            "What is a common sign of a phishing email?",
            [
                "A) Perfect grammar and spelling",
                "B) Requests for urgent action or personal information",
                "C) Comes from a well-known company's official domain",
                "D) Contains detailed contact information for the sender",
            ],
            "B) Requests for urgent action or personal information",
            "Phishing emails often create a sense of urgency, contain grammatical errors, or ask for sensitive data like passwords.",
        ),
        Question::multiple_choice(
            "What is the best practice for backing up important data?",
            [
                "A) Only store it on your computer's hard drive",
                "B) Use multiple methods, including cloud storage and external drives",
                "C) Email it to yourself as the only backup",
                "D) Don't back up; data loss is rare",
            ],
            "B) Use multiple methods, including cloud storage and external drives",
            "The 3-2-1 backup rule suggests having three copies of your data, on two different media, with one copy offsite.",
        ),
        Question::boolean(
            "True or False: Antivirus software can protect you from all types of cyber threats.",
            false,
            "False. While antivirus software is crucial, it's not foolproof. A multi-layered approach including strong passwords, firewalls, and cautious online behavior is necessary.",
        ),
        Question::multiple_choice(
            "What is social engineering in cybersecurity?",
            [
                "A) Using social media to promote cybersecurity awareness",
                "B) Manipulating people to trick them into divulging confidential information",
                "C) Designing secure social networks",
                "D) Automated systems for detecting online fraud",
            ],
            "B) Manipulating people to trick them into divulging confidential information",
            "Social engineering preys on human psychology to trick individuals into performing actions or divulging confidential information.",
        ),
    ]
}
