//! Static content for the knowledge engine and the topic-info intent.

/// Sentiment cue and the empathetic prefix it triggers, scanned in order.
pub const SENTIMENTS: &[(&str, &str)] = &[
    ("worried", "It's completely understandable to feel that way. "),
    ("frustrated", "I understand that can be frustrating. "),
    ("curious", "That's a great question to be curious about! "),
    (
        "confused",
        "It's okay to feel confused, cybersecurity can be complex. ",
    ),
    (
        "overwhelmed",
        "Feeling overwhelmed is common when dealing with these topics. ",
    ),
];

/// Keyword, its response variants, and the longer elaboration given on follow-up.
pub const KEYWORDS: &[(&str, &[&str], &str)] = &[
    (
        "password",
        &[
            "Make sure to use strong, unique passwords for each account. Avoid using personal details in your passwords.",
            "A strong password combines uppercase and lowercase letters, numbers, and symbols. Aim for at least 12 characters!",
            "Using a password manager can help you create and store complex, unique passwords securely.",
        ],
        "For more on passwords: Consider using a password manager to securely store and generate complex passwords. Two-factor authentication (2FA) adds another layer of security.",
    ),
    (
        "scam",
        &[
            "Scams often involve urgent requests for money or personal information. Always verify the sender before acting.",
            "Be wary of unsolicited messages or calls promising big rewards. If it sounds too good to be true, it probably is a scam.",
            "Common scams include phishing, tech support scams, and romance scams. Always be skeptical.",
        ],
        "To elaborate on scams: Common types include phishing, tech support scams, and romance scams. Always be skeptical and verify independently. Never give out personal details over the phone unless you initiated the call.",
    ),
    (
        "privacy",
        &[
            "Review the privacy settings on your social media and online accounts regularly. Limit what information you share publicly.",
            "Understanding privacy policies helps you know how your data is being used. Always read them if you can!",
            "Protecting your online privacy means being mindful of what you share and who you share it with.",
        ],
        "More about privacy: Data breaches can expose your personal information. Regularly check if your email or passwords have been compromised on sites like Have I Been Pwned. Also, be mindful of app permissions.",
    ),
    (
        "phishing",
        &[
            "Be cautious of emails asking for personal information. Scammers often disguise themselves as trusted organisations.",
            "Always check the sender's email address and look for suspicious links in phishing attempts. Don't click on them!",
            "If an email seems suspicious, don't reply or click any links. Instead, go directly to the official website or contact the organization by phone.",
        ],
        "Further phishing tips: Phishing can also happen via text messages (smishing) or voice calls (vishing). The goal is always to trick you into revealing sensitive data. If in doubt, delete the message.",
    ),
    (
        "malware",
        &[
            "Malware is malicious software designed to harm or exploit your computer system. It includes viruses, worms, and ransomware.",
            "To protect against malware, keep your software updated, use reputable antivirus software, and be careful about opening suspicious attachments.",
        ],
        "Expanding on malware: Ransomware encrypts your files and demands payment, while spyware secretly monitors your activity. Adware floods you with unwanted ads. Regular backups are crucial to recover from ransomware.",
    ),
    (
        "2fa",
        &[
            "Two-factor authentication (2FA) adds an extra layer of security by requiring a second verification step, like a code from your phone, in addition to your password.",
            "Always enable 2FA wherever possible, especially for sensitive accounts like email and banking.",
        ],
        "More about 2FA: While SMS-based 2FA is common, authenticator apps (like Google Authenticator or Authy) are generally more secure as they don't rely on phone numbers that can be swapped.",
    ),
];

/// Phrases asking to hear more about the last topic.
pub const FOLLOW_UP_PHRASES: &[&str] = &[
    "tell me more",
    "explain",
    "more details",
    "elaborate",
    "what else",
    "can you tell me more",
    "more",
    "anymore",
    "let me know more",
];

/// Reply used when nothing else produced content.
pub const DEFAULT_HELP: &str = "I'm not sure I understand. Can you try rephrasing or asking about a specific cybersecurity topic like 'password', 'scam', 'privacy', 'phishing tips', 'malware', or '2FA'?";

/// Topic-info explanations keyed by canonical topic.
pub const TOPIC_INFO: &[(&str, &str)] = &[
    ("phishing", "Phishing is a cybercrime where attackers trick individuals into revealing sensitive information, often through fake emails or websites. Always check the sender and URL carefully!"),
    ("malware", "Malware is malicious software, like viruses or ransomware, designed to damage or gain unauthorized access to computer systems. Keep your antivirus updated!"),
    ("2fa", "Two-Factor Authentication (2FA) adds an extra layer of security by requiring two different methods of verification to log in, like a password and a code from your phone."),
    ("password", "A strong password is long (12+ characters), unique, and combines uppercase, lowercase, numbers, and symbols. Consider using a password manager!"),
    ("encryption", "Encryption is the process of converting information or data into a code to prevent unauthorized access. It's crucial for protecting sensitive data."),
    ("firewall", "A firewall is a network security system that monitors and controls incoming and outgoing network traffic based on predetermined security rules. It acts as a barrier between your internal network and external sources."),
    ("virus", "A computer virus is a type of malicious software that, when executed, replicates itself by modifying other computer programs and inserting its own code."),
    ("ransomware", "Ransomware is a type of malicious software that threatens to publish the victim's data or perpetually block access to it unless a ransom is paid."),
    ("vpn", "A Virtual Private Network (VPN) creates a secure, encrypted connection over a less secure network, such as the internet. It helps protect your online privacy and security."),
    ("cybersecurity", "Cybersecurity is the practice of protecting systems, networks, and programs from digital attacks. It's about ensuring confidentiality, integrity, and availability of information."),
    ("data breach", "A data breach is a security incident where sensitive, protected, or confidential data is copied, transmitted, viewed, stolen, or used by an individual unauthorized to do so."),
    ("social engineering", "Social engineering is the psychological manipulation of people into performing actions or divulging confidential information. Attackers often use deception to trick victims."),
    ("spyware", "Spyware is malicious software designed to enter your computer device, gather data about you, and forward it to a third party without your knowledge or consent."),
    ("trojan", "A Trojan horse, or Trojan, is a type of malicious code or software that looks legitimate but can take control of your computer. It is designed to damage, disrupt, steal, or inflict other harmful actions."),
];

/// Alternate spellings mapped to their canonical topic.
pub const TOPIC_ALIASES: &[(&str, &str)] = &[("two-factor authentication", "2fa")];

/// Prompt for a topic the library does not cover.
pub const UNKNOWN_TOPIC: &str = "I can provide information on phishing, malware, 2FA, passwords, and more. What specific topic would you like to know about?";
